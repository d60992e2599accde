use parsec_core::analyze;

fn main() {
    let document = r#"
        {
            "user": {
                "name": "John Doe",
                "roles": ["admin", "ops"]
            },
            "retries": 3
        }
    "#;

    match analyze(document, "example.json") {
        Ok(result) => {
            let json_output = result.to_json().unwrap();
            println!("Parsed document:\n{json_output}");
        }
        Err(e) => {
            eprintln!("Failed to parse document: {e:?}");
        }
    }
}
