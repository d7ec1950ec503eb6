//! Outbound map links and share text.
//!
//! Only builds strings; opening them is up to the caller.

use crate::Coordinate;
use serde::{Deserialize, Serialize};

const GOOGLE_MAPS_BASE: &str = "https://www.google.com/maps";

/// Map application to open a location in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MapApp {
    #[default]
    Google,
    Apple,
    Waze,
}

/// Unknown names fall back to [`MapApp::Google`].
impl From<&str> for MapApp {
    fn from(app: &str) -> Self {
        match app.trim().to_ascii_lowercase().as_str() {
            "apple" => MapApp::Apple,
            "waze" => MapApp::Waze,
            _ => MapApp::Google,
        }
    }
}

fn non_empty(name: Option<&str>) -> Option<&str> {
    name.map(str::trim).filter(|n| !n.is_empty())
}

/// Google Maps view of a location, searching for `name` when given.
pub fn google_maps_url(coord: &Coordinate, name: Option<&str>) -> String {
    let (lat, lng) = (coord.latitude, coord.longitude);
    match non_empty(name) {
        Some(name) => format!(
            "{}/search/{}/@{},{},15z",
            GOOGLE_MAPS_BASE,
            urlencoding::encode(name),
            lat,
            lng
        ),
        None => format!("{}/@{},{},15z", GOOGLE_MAPS_BASE, lat, lng),
    }
}

/// Google Maps directions to `destination`.
///
/// Without an `origin` Google Maps asks the device for its location.
pub fn directions_url(destination: &Coordinate, name: Option<&str>, origin: Option<&Coordinate>) -> String {
    let mut url = format!("{}/dir/", GOOGLE_MAPS_BASE);

    match origin {
        Some(o) => url.push_str(&format!("{},{}/", o.latitude, o.longitude)),
        None => url.push_str("Current+Location/"),
    }

    match non_empty(name) {
        Some(name) => url.push_str(&format!(
            "{}/@{},{}",
            urlencoding::encode(name),
            destination.latitude,
            destination.longitude
        )),
        None => url.push_str(&format!("{},{}", destination.latitude, destination.longitude)),
    }

    url
}

/// Deep link into the chosen map app.
pub fn map_app_url(app: MapApp, coord: &Coordinate, name: &str) -> String {
    let encoded = urlencoding::encode(name);
    match app {
        MapApp::Apple => format!(
            "maps://maps.apple.com/?daddr={},{}&q={}",
            coord.latitude, coord.longitude, encoded
        ),
        MapApp::Waze => format!(
            "waze://ul?ll={},{}&q={}",
            coord.latitude, coord.longitude, encoded
        ),
        MapApp::Google => google_maps_url(coord, Some(name)),
    }
}

/// Payload for a native share sheet or clipboard copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShareMessage {
    pub title: String,
    pub text: String,
    pub url: String,
}

/// Builds the share payload for a location.
pub fn share_message(coord: &Coordinate, name: &str, address: Option<&str>) -> ShareMessage {
    let url = google_maps_url(coord, None);

    let mut text = format!("📍 {}", name);
    if let Some(address) = non_empty(address) {
        text.push('\n');
        text.push_str(address);
    }
    text.push('\n');
    text.push_str(&url);

    ShareMessage {
        title: format!("Ubicación: {}", name),
        text,
        url,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CAFE: Coordinate = Coordinate { latitude: 22.2486, longitude: -97.8642 };

    #[test]
    fn test_google_maps_plain() {
        assert_eq!(
            google_maps_url(&CAFE, None),
            "https://www.google.com/maps/@22.2486,-97.8642,15z"
        );
        assert_eq!(google_maps_url(&CAFE, Some("")), google_maps_url(&CAFE, None));
    }

    #[test]
    fn test_google_maps_search_encodes_name() {
        assert_eq!(
            google_maps_url(&CAFE, Some("Café Madero")),
            "https://www.google.com/maps/search/Caf%C3%A9%20Madero/@22.2486,-97.8642,15z"
        );
    }

    #[test]
    fn test_directions_from_current_location() {
        assert_eq!(
            directions_url(&CAFE, None, None),
            "https://www.google.com/maps/dir/Current+Location/22.2486,-97.8642"
        );
    }

    #[test]
    fn test_directions_from_origin_with_name() {
        let origin = Coordinate::new(22.2354, -97.8606);
        assert_eq!(
            directions_url(&CAFE, Some("Cafe"), Some(&origin)),
            "https://www.google.com/maps/dir/22.2354,-97.8606/Cafe/@22.2486,-97.8642"
        );
    }

    #[test]
    fn test_app_links() {
        assert_eq!(
            map_app_url(MapApp::Apple, &CAFE, "Cafe Madero"),
            "maps://maps.apple.com/?daddr=22.2486,-97.8642&q=Cafe%20Madero"
        );
        assert_eq!(
            map_app_url(MapApp::Waze, &CAFE, "Cafe"),
            "waze://ul?ll=22.2486,-97.8642&q=Cafe"
        );
        assert_eq!(
            map_app_url(MapApp::from("bing"), &CAFE, "Cafe"),
            google_maps_url(&CAFE, Some("Cafe"))
        );
    }

    #[test]
    fn test_share_message_with_address() {
        let msg = share_message(&CAFE, "Café Madero", Some("Calle Madero #156"));
        assert_eq!(msg.title, "Ubicación: Café Madero");
        assert_eq!(
            msg.text,
            "📍 Café Madero\nCalle Madero #156\nhttps://www.google.com/maps/@22.2486,-97.8642,15z"
        );
    }

    #[test]
    fn test_share_message_without_address() {
        let msg = share_message(&CAFE, "Café Madero", None);
        assert_eq!(msg.text, format!("📍 Café Madero\n{}", msg.url));
    }
}
