use std::path::Path;

fn main() {
    let catalog_path = Path::new("catalogs/tag_systems.json");
    validate_catalog_file(catalog_path);
    set_build_dependencies();
}

fn validate_catalog_file(catalog_path: &Path) {
    // Ensure catalog exists at build time
    assert!(
        catalog_path.exists(),
        "\n\nCATALOG BUILD ERROR: File not found\n\
         Path: {}\n\
         Please create the catalog file before building.\n",
        catalog_path.display()
    );

    let catalog_contents = std::fs::read_to_string(catalog_path).unwrap_or_else(|e| {
        panic!(
            "\n\nCATALOG BUILD ERROR: Failed to read file\n\
             Path: {}\n\
             Error: {e}\n",
            catalog_path.display()
        );
    });

    let catalog: serde_json::Value = serde_json::from_str(&catalog_contents).unwrap_or_else(|e| {
        panic!(
            "\n\nCATALOG BUILD ERROR: Invalid JSON\n\
             Path: {}\n\
             Error: {e}\n\
             Hint: Check for missing commas, brackets, or invalid syntax.\n",
            catalog_path.display()
        );
    });

    validate_catalog_structure(&catalog);
}

fn validate_catalog_structure(catalog: &serde_json::Value) {
    assert!(
        catalog.is_object(),
        "\n\nCATALOG BUILD ERROR: Root must be a JSON object\n\
         Got: {catalog}\n"
    );

    let systems = catalog.get("systems").unwrap_or_else(|| {
        panic!(
            "\n\nCATALOG BUILD ERROR: Missing 'systems' field\n\
             The catalog must have a top-level 'systems' array.\n"
        );
    });

    let systems = systems.as_array().unwrap_or_else(|| {
        panic!(
            "\n\nCATALOG BUILD ERROR: 'systems' must be an array\n\
             Got: {systems}\n"
        );
    });

    let total_conventions = validate_systems(systems);

    println!(
        "cargo:warning=Validated catalog: {} systems, {total_conventions} total conventions",
        systems.len()
    );
}

fn validate_systems(systems: &[serde_json::Value]) -> usize {
    let mut total_conventions = 0;

    for (i, system) in systems.iter().enumerate() {
        let system_id = system
            .get("id")
            .and_then(|v| v.as_str())
            .unwrap_or("<unknown>");

        validate_system_fields(system, system_id, i);
        total_conventions += validate_system_conventions(system, system_id);
    }

    total_conventions
}

fn validate_system_fields(system: &serde_json::Value, system_id: &str, index: usize) {
    assert!(
        system.get("id").is_some(),
        "\n\nCATALOG BUILD ERROR: System at index {index} missing 'id' field\n"
    );
    assert!(
        system.get("name").is_some(),
        "\n\nCATALOG BUILD ERROR: System '{system_id}' (index {index}) missing 'name' field\n"
    );
    assert!(
        system.get("conventions").is_some(),
        "\n\nCATALOG BUILD ERROR: System '{system_id}' (index {index}) missing 'conventions' field\n"
    );
}

fn validate_system_conventions(system: &serde_json::Value, system_id: &str) -> usize {
    if let Some(conventions) = system.get("conventions").and_then(|c| c.as_array()) {
        for (j, convention) in conventions.iter().enumerate() {
            validate_convention_fields(convention, system_id, j);
        }
        conventions.len()
    } else {
        0
    }
}

fn validate_convention_fields(convention: &serde_json::Value, system_id: &str, index: usize) {
    let convention_id = convention
        .get("id")
        .and_then(|v| v.as_str())
        .unwrap_or("<unknown>");

    for field in ["id", "name", "keyword", "start", "end"] {
        assert!(
            convention.get(field).is_some(),
            "\n\nCATALOG BUILD ERROR: System '{system_id}' convention '{convention_id}' (index {index}) missing '{field}' field\n"
        );
    }

    let definitions = convention.get("definitions").and_then(|d| d.as_array());
    assert!(
        definitions.is_some_and(|d| !d.is_empty()),
        "\n\nCATALOG BUILD ERROR: System '{system_id}' convention '{convention_id}' has no definitions\n\
         Every convention needs at least one range or abbreviation.\n"
    );
}

fn set_build_dependencies() {
    // Tell cargo to rerun if catalog changes
    println!("cargo:rerun-if-changed=catalogs/tag_systems.json");

    // Tell cargo to rerun if build.rs changes
    println!("cargo:rerun-if-changed=build.rs");
}
