use std::path::Path;

use anyhow::Result;
use mdgen::domain::value_objects::Platform;

pub fn cmd_rules(rules: Option<&Path>, json: bool) -> Result<()> {
    let (table, loaded) = super::load_rule_table(rules)?;
    let current = Platform::current().ok();

    if json {
        let entries: Vec<_> = table
            .iter()
            .map(|(code, rule)| {
                serde_json::json!({
                    "platform_code": code,
                    "environment_variable_name": rule.environment_variable_name(),
                    "output_directory": rule.output_directory(),
                })
            })
            .collect();
        let output = serde_json::json!({
            "source": loaded.source.to_string(),
            "current_platform": current.map(|p| p.code_str()),
            "rules": entries,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("Rules from {}", loaded.source);
    for (code, rule) in table.iter() {
        let platform = Platform::ALL
            .iter()
            .find(|p| p.code_str() == code)
            .map(|p| p.display_name())
            .unwrap_or("?");
        let marker = if current.map(|p| p.code_str()).as_deref() == Some(code) {
            "*"
        } else {
            " "
        };
        println!(
            "{} {:<2} {:<8} ${}{}{}",
            marker,
            code,
            platform,
            rule.environment_variable_name(),
            std::path::MAIN_SEPARATOR,
            rule.output_directory()
        );
    }
    Ok(())
}
