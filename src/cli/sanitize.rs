use std::path::Path;

use serde_json::Value;
use taskdesk_validation::sanitize_value;

pub fn run(path: &Path) -> anyhow::Result<()> {
    let value: Value = super::read_json(path)?;

    super::print_json(&sanitize_value(&value))
}
