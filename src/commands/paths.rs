use std::path::Path;

use anyhow::Result;
use serde::Serialize;
use mdgen::domain::services::DefaultOutputPathResolver;
use mdgen::domain::value_objects::DefinitionPath;
use mdgen::infrastructure::HostEnvironment;

#[derive(Serialize)]
struct PathsReport<'a> {
    #[serde(flatten)]
    path: &'a DefinitionPath,
    package: Option<&'a str>,
    package_output_path: Option<&'a str>,
}

pub fn cmd_paths(
    file: &str,
    output: &str,
    package: Option<&str>,
    rules: Option<&Path>,
    json: bool,
) -> Result<()> {
    let (table, _) = super::load_rule_table(rules)?;
    let env = HostEnvironment;
    let resolver = DefaultOutputPathResolver::new(&table, &env);

    let path = DefinitionPath::with_resolver(file, output, &resolver)?;
    let package_path = package.map(|name| path.output_path_for(name));

    if json {
        let report = PathsReport {
            path: &path,
            package,
            package_output_path: package_path.as_deref(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("file:    {}", path.file_path());
    println!("output:  {}", path.output_path());
    if let (Some(name), Some(package_path)) = (package, package_path) {
        println!("package: {} -> {}", name, package_path);
    }
    Ok(())
}
