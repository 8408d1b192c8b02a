use anyhow::Result;

fn main() -> Result<()> {
    apns_cli::main_entry()
}
