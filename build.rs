use std::fs;

fn main() {
    // Validate the built-in page template at compile time
    let template_path = "src/default_template.html";
    println!("cargo:rerun-if-changed={}", template_path);

    let content = fs::read_to_string(template_path).expect("Failed to read default_template.html");

    for slot in ["{{ Title }}", "{{ Content }}"] {
        if !content.contains(slot) {
            panic!("default_template.html is missing the {} placeholder", slot);
        }
    }
}
