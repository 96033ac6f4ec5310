// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_markdown_content(size: usize) -> String {
    let base = "# Title\n\n## Section\n\nParagraph with some content and a [link](https://example.com).\nA second line of the same paragraph.\n\n- Bullet point\n- Another [item](x)\n\n```rust\nfn example() {\n    println!(\"a < b && c\");\n}\n```\n\n";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_link_heavy_line(links: usize) -> String {
    (0..links)
        .map(|i| format!("text [label {i}](https://example.com/{i}) [unclosed "))
        .collect()
}
