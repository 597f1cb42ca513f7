//! Demonstrate the substitution errors a command line can raise.

fn main() {
    // Empty braces.
    match shellquote_rs::parse("echo ${}") {
        Ok(_) => println!("Parsed OK (unexpected)"),
        Err(e) => {
            println!("Error: {e}");
            println!("  Kind:   {:?}", e.kind);
            println!("  Offset: byte {}", e.offset);
        }
    }

    println!();

    // Unterminated brace reference.
    match shellquote_rs::parse("docker run ${IMAGE") {
        Ok(_) => println!("Parsed OK (unexpected)"),
        Err(e) => {
            println!("Error: {e}");
            println!("  Kind:   {:?}", e.kind);
            println!("  Offset: byte {}", e.offset);
        }
    }

    println!();

    // Unbalanced quotes are not an error: the open quote takes the rest.
    let tokens = shellquote_rs::parse("echo \"take it all").expect("parse failed");
    println!("Unbalanced quote tokens: {tokens:?}");
}
