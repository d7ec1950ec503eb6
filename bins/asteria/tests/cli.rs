use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;
use tempfile::TempDir;

/// Isolated working directory with an empty config and a seeded listing.
struct Fixture {
    dir: TempDir,
}

impl Fixture {
    fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("asteria.toml"), "").unwrap();
        std::fs::write(dir.path().join("negocios.json"), LISTING).unwrap();
        Self { dir }
    }

    fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("asteria").unwrap();
        cmd.current_dir(self.dir.path())
            .env_remove("RUST_LOG")
            .arg("--config")
            .arg(self.path("asteria.toml"));
        cmd
    }

    fn write(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.path(name);
        std::fs::write(&path, contents).unwrap();
        path
    }
}

const LISTING: &str = r#"[
  {
    "id": "1",
    "name": "Restaurante El Huasteco",
    "category": "Restaurantes",
    "address": {"street": "Av. Universidad #234", "neighborhood": "Centro", "city": "Tampico",
                "coordinates": {"lat": 22.2354, "lng": -97.8606}},
    "rating_average": 4.8,
    "total_reviews": 324
  },
  {
    "id": "2",
    "name": "Café Madero",
    "category": "Cafés",
    "address": {"street": "Calle Madero #156", "neighborhood": "Zona Dorada", "city": "Tampico",
                "coordinates": {"lat": 22.2486, "lng": -97.8642}},
    "rating_average": 4.6,
    "total_reviews": 189
  },
  {
    "id": "3",
    "name": "Sin ubicación",
    "category": "Cafés",
    "address": {"street": "", "neighborhood": "Centro", "city": "Altamira"}
  },
  {
    "id": "4",
    "name": "Sucursal Monterrey",
    "category": "Restaurantes",
    "lat": 25.6866,
    "lng": -100.3161
  }
]"#;

fn parse_json(output: &[u8]) -> serde_json::Value {
    serde_json::from_slice(output).unwrap()
}

#[test]
fn distance_prints_formatted_values() {
    let fx = Fixture::new();
    fx.cmd()
        .args(["distance", "22.2354,-97.8606", "22.2486,-97.8642", "--mode", "walking"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1.51km"))
        .stdout(predicate::str::contains("18 min walking"));
}

#[test]
fn nearby_json_is_sorted_and_skips_unlocated() {
    let fx = Fixture::new();
    let output = fx
        .cmd()
        .args(["nearby", "negocios.json", "--origin", "22.2354,-97.8606", "--radius", "10", "--json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let results = parse_json(&output.stdout);
    let results = results.as_array().unwrap();

    assert_eq!(results.len(), 2);
    assert_eq!(results[0]["name"], "Restaurante El Huasteco");
    assert_eq!(results[0]["distance"], 0.0);
    assert_eq!(results[1]["name"], "Café Madero");
    assert!(results.iter().all(|r| r["distance"].as_f64().unwrap() <= 10.0));
}

#[test]
fn nearby_without_origin_falls_back_to_downtown() {
    let fx = Fixture::new();
    fx.cmd()
        .args(["nearby", "negocios.json"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Geolocalización no soportada"))
        .stdout(predicate::str::contains("2 businesses within 10km"))
        .stderr(predicate::str::contains("1 business skipped"));
}

#[test]
fn nearby_respects_limit_from_config() {
    let fx = Fixture::new();
    let config = fx.write("limit.toml", "[search]\nmax_results = 1\n\n[origin]\nlat = 22.2486\nlng = -97.8642\n");

    let output = Command::cargo_bin("asteria")
        .unwrap()
        .current_dir(fx.dir.path())
        .arg("--config")
        .arg(&config)
        .args(["nearby", "negocios.json", "--json"])
        .output()
        .unwrap();

    let results = parse_json(&output.stdout);
    assert_eq!(results.as_array().unwrap().len(), 1);
    assert_eq!(results[0]["name"], "Café Madero");
}

#[test]
fn nearby_rejects_bad_radius() {
    let fx = Fixture::new();
    fx.cmd()
        .args(["nearby", "negocios.json", "--radius", "-2"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("E4002"));
}

#[test]
fn nearby_zero_radius_keeps_exact_matches() {
    let fx = Fixture::new();
    let output = fx
        .cmd()
        .args(["nearby", "negocios.json", "--origin", "22.2354,-97.8606", "--radius", "0", "--json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let results = parse_json(&output.stdout);
    assert_eq!(results.as_array().unwrap().len(), 1);
    assert_eq!(results[0]["name"], "Restaurante El Huasteco");
}

#[test]
fn nearby_missing_listing_is_an_io_error() {
    let fx = Fixture::new();
    fx.cmd()
        .args(["nearby", "no-existe.json"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("E2001"))
        .stderr(predicate::str::contains("no-existe.json"));
}

#[test]
fn nearby_reports_malformed_listing() {
    let fx = Fixture::new();
    fx.write("roto.json", "{\"name\": \"no es una lista\"}");
    fx.cmd()
        .args(["nearby", "roto.json"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Parsing"));
}

#[test]
fn eta_uses_driving_for_unknown_mode() {
    let fx = Fixture::new();
    fx.cmd()
        .args(["eta", "5", "--mode", "hovercraft"])
        .assert()
        .success()
        .stdout("8 min\n");
}

#[test]
fn eta_whole_hours() {
    let fx = Fixture::new();
    fx.cmd().args(["eta", "40"]).assert().success().stdout("1h\n");
}

#[test]
fn area_classifies_points() {
    let fx = Fixture::new();
    fx.cmd()
        .args(["area", "22.2354,-97.8606"])
        .assert()
        .success()
        .stdout(predicate::str::contains("inside the Tampico metro area"));
    fx.cmd()
        .args(["area", "25.6866,-100.3161"])
        .assert()
        .success()
        .stderr(predicate::str::contains("outside"));
}

#[test]
fn pins_json_filters_by_city() {
    let fx = Fixture::new();
    let output = fx
        .cmd()
        .args(["pins", "negocios.json", "--city", "tampico", "--json"])
        .output()
        .unwrap();

    let pins = parse_json(&output.stdout);
    let pins = pins.as_array().unwrap();
    assert_eq!(pins.len(), 2);
    assert_eq!(pins[0]["id"], 1);
    assert_eq!(pins[0]["count"], 1);
}

#[test]
fn pins_rejects_unknown_city() {
    let fx = Fixture::new();
    fx.cmd()
        .args(["pins", "negocios.json", "--city", "Monterrey"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown city"));
}

#[test]
fn links_json_contains_all_urls() {
    let fx = Fixture::new();
    let output = fx
        .cmd()
        .args(["links", "22.2486,-97.8642", "--name", "Café Madero", "--app", "waze", "--json"])
        .output()
        .unwrap();

    let links = parse_json(&output.stdout);
    assert_eq!(
        links["view"],
        "https://www.google.com/maps/search/Caf%C3%A9%20Madero/@22.2486,-97.8642,15z"
    );
    assert_eq!(
        links["directions"],
        "https://www.google.com/maps/dir/Current+Location/Caf%C3%A9%20Madero/@22.2486,-97.8642"
    );
    assert_eq!(links["app"], "waze://ul?ll=22.2486,-97.8642&q=Caf%C3%A9%20Madero");
    assert_eq!(links["share"]["title"], "Ubicación: Café Madero");
}

#[test]
fn missing_config_file_exits_with_config_code() {
    let fx = Fixture::new();
    Command::cargo_bin("asteria")
        .unwrap()
        .current_dir(fx.dir.path())
        .args(["--config", "no-existe.toml", "config"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("E3001"));
}

#[test]
fn negative_radius_in_config_exits_with_config_code() {
    let fx = Fixture::new();
    let config = fx.write("malo.toml", "[search]\nradius_km = -1.0\n");

    Command::cargo_bin("asteria")
        .unwrap()
        .current_dir(fx.dir.path())
        .arg("--config")
        .arg(&config)
        .arg("config")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("E3003"));
}

#[test]
fn config_prints_effective_values() {
    let fx = Fixture::new();
    fx.cmd()
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("radius_km = 10.0"))
        .stdout(predicate::str::contains("mode = \"driving\""));
}
