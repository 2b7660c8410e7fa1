//! Shell completion scripts.

use std::io;

use clap::CommandFactory;
use clap_complete::{generate, Shell};

/// Write the completion script of `C` for `shell` to `out`.
///
/// The binary name is taken from the command definition.
pub fn write_completion<C: CommandFactory>(shell: Shell, out: &mut dyn io::Write) -> io::Result<()> {
    let mut cmd = C::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, out);
    out.flush()
}
