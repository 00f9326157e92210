pub mod report;

/// Print pre-rendered lines to stdout.
pub fn output(lines: &[String]) {
    for line in lines {
        println!("{line}");
    }
}
