pub fn print_line(line: &str) {
    println!("{line}");
}
