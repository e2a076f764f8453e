//! Console entry-point logic, kept in a library so it can be exercised with
//! an in-memory writer.

use std::io::Write;

/// Print the greeting followed by the received argument list.
///
/// Output is exactly two lines: `Hello World!`, then `Program arguments: `
/// with the arguments joined by `", "` (an empty join when no arguments were
/// supplied). Write failures propagate to the caller; the platform, not this
/// program, decides what a broken stdout means.
pub fn run(args: &[String], out: &mut impl Write) -> std::io::Result<()> {
    writeln!(out, "Hello World!")?;
    writeln!(out, "Program arguments: {}", args.join(", "))?;
    Ok(())
}
