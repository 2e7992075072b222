//! Implementation of the `spektacular runners` command.

use crate::error::Result;
use crate::runner::registered_names;

/// Print every registered runner name, one per line.
pub fn cmd_runners() -> Result<()> {
    for name in registered_names() {
        println!("{}", name);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_cmd_runners_succeeds() {
        assert!(cmd_runners().is_ok());
    }
}
