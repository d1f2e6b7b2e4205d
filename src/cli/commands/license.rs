//! `tinycrypt license` — show license information.

use console::style;

use crate::errors::Result;

const NOTICE: &str = "\
Licensed under either of

  * Apache License, Version 2.0 (http://www.apache.org/licenses/LICENSE-2.0)
  * MIT license (http://opensource.org/licenses/MIT)

at your option.

THE SOFTWARE IS PROVIDED \"AS IS\", WITHOUT WARRANTY OF ANY KIND.";

/// Execute the `license` command.
pub fn execute() -> Result<()> {
    println!(
        "{} {}",
        style("tinycrypt").bold(),
        style(env!("CARGO_PKG_VERSION")).blue().bold()
    );
    println!();
    println!("{NOTICE}");
    Ok(())
}
