//! Default output path resolution
//!
//! Combines the host platform, the platform's [`DefaultOutputRule`] and the
//! value of the rule's environment variable into a single output path:
//!
//! ```text
//! $ENV_VAR + separator + output_directory
//! ```
//!
//! Every step is fallible and none of them falls back silently. An unset
//! (or empty) environment variable is reported as missing configuration
//! rather than spliced into the path.

use tracing::debug;

use crate::domain::entities::DefaultOutputRule;
use crate::domain::ports::{Environment, OutputRuleLookup};
use crate::domain::value_objects::Platform;
use crate::error::{GeneratorError, GeneratorResult};
use crate::infrastructure::{HostEnvironment, RuleTable};

/// Resolve the default output path for `platform`.
pub fn resolve_default_output_path(
    platform: Platform,
    rules: &dyn OutputRuleLookup,
    env: &dyn Environment,
) -> GeneratorResult<String> {
    let code = platform.code_str();
    let rule = rules
        .lookup(&code)
        .ok_or_else(|| GeneratorError::ConfigurationMissing {
            detail: format!(
                "no default output rule for platform {} (code {})",
                platform, code
            ),
        })?;

    join_rule(&rule, env)
}

fn join_rule(rule: &DefaultOutputRule, env: &dyn Environment) -> GeneratorResult<String> {
    let name = rule.environment_variable_name();
    let base = env
        .var(name)
        .filter(|value| !value.is_empty())
        .ok_or_else(|| GeneratorError::ConfigurationMissing {
            detail: format!("environment variable '{}' is not set", name),
        })?;

    let mut path = String::with_capacity(base.len() + rule.output_directory().len() + 1);
    path.push_str(&base);
    path.push(env.path_separator());
    path.push_str(rule.output_directory());
    Ok(path)
}

/// Where the resolver takes its platform from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PlatformSource<'a> {
    Host,
    Fixed(Platform),
    Os(&'a str),
}

/// Resolver bundling a platform source with its collaborators.
///
/// With no fixed platform the host is classified on every call to
/// [`resolve`](Self::resolve).
#[derive(Clone, Copy)]
pub struct DefaultOutputPathResolver<'a> {
    platform: PlatformSource<'a>,
    rules: &'a dyn OutputRuleLookup,
    env: &'a dyn Environment,
}

impl DefaultOutputPathResolver<'static> {
    /// Resolver over the process environment and the shared rule table.
    pub fn host() -> GeneratorResult<Self> {
        static HOST: HostEnvironment = HostEnvironment;
        let rules = RuleTable::shared()?;
        Ok(Self::new(rules, &HOST))
    }
}

impl<'a> DefaultOutputPathResolver<'a> {
    /// Resolver for the host platform
    pub fn new(rules: &'a dyn OutputRuleLookup, env: &'a dyn Environment) -> Self {
        Self {
            platform: PlatformSource::Host,
            rules,
            env,
        }
    }

    /// Pin the platform instead of classifying the host
    pub fn with_platform(mut self, platform: Platform) -> Self {
        self.platform = PlatformSource::Fixed(platform);
        self
    }

    /// Classify `os` (a `std::env::consts::OS` value) instead of the host
    pub fn with_os(mut self, os: &'a str) -> Self {
        self.platform = PlatformSource::Os(os);
        self
    }

    pub fn path_separator(&self) -> char {
        self.env.path_separator()
    }

    pub fn resolve(&self) -> GeneratorResult<String> {
        let platform = match self.platform {
            PlatformSource::Host => Platform::current()?,
            PlatformSource::Fixed(platform) => platform,
            PlatformSource::Os(os) => Platform::classify(os)?,
        };
        debug!(%platform, code = platform.code(), "resolving default output path");

        let path = resolve_default_output_path(platform, self.rules, self.env)?;
        debug!(output_path = %path, "resolved default output path");
        Ok(path)
    }
}

impl std::fmt::Debug for DefaultOutputPathResolver<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DefaultOutputPathResolver")
            .field("platform", &self.platform)
            .field("separator", &self.env.path_separator())
            .finish_non_exhaustive()
    }
}


#[cfg(test)]
mod tests {
    use super::testing::{MapEnvironment, MapLookup};
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn resolves_env_value_joined_with_directory() {
        let rules = MapLookup::default().with_rule(Platform::Linux, "HOME", "Desktop");
        let env = MapEnvironment::new('/').with_var("HOME", "/home/alice");

        let path = resolve_default_output_path(Platform::Linux, &rules, &env).unwrap();
        assert_eq!(path, "/home/alice/Desktop");
    }

    #[test]
    fn uses_environment_separator() {
        let rules = MapLookup::default().with_rule(Platform::Windows, "USERPROFILE", "Desktop");
        let env = MapEnvironment::new('\\').with_var("USERPROFILE", r"C:\Users\alice");

        let path = resolve_default_output_path(Platform::Windows, &rules, &env).unwrap();
        assert_eq!(path, r"C:\Users\alice\Desktop");
    }

    #[test]
    fn missing_rule_is_configuration_missing() {
        let rules = MapLookup::default().with_rule(Platform::Windows, "USERPROFILE", "Desktop");
        let env = MapEnvironment::new('/').with_var("HOME", "/home/alice");

        let err = resolve_default_output_path(Platform::Linux, &rules, &env).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ConfigurationMissing);
        assert!(err.to_string().contains("code 2"));
    }

    #[test]
    fn unset_variable_is_configuration_missing() {
        let rules = MapLookup::default().with_rule(Platform::Linux, "MDGEN_UNSET", "Desktop");
        let env = MapEnvironment::new('/');

        let err = resolve_default_output_path(Platform::Linux, &rules, &env).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ConfigurationMissing);
        assert!(err.to_string().contains("MDGEN_UNSET"));
    }

    #[test]
    fn empty_variable_is_configuration_missing() {
        let rules = MapLookup::default().with_rule(Platform::Linux, "HOME", "Desktop");
        let env = MapEnvironment::new('/').with_var("HOME", "");

        let err = resolve_default_output_path(Platform::Linux, &rules, &env).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ConfigurationMissing);
    }

    #[test]
    fn resolver_with_pinned_platform() {
        let rules = MapLookup::default()
            .with_rule(Platform::Linux, "HOME", "linux-out")
            .with_rule(Platform::MacOs, "HOME", "mac-out");
        let env = MapEnvironment::new('/').with_var("HOME", "/h");

        let resolver = DefaultOutputPathResolver::new(&rules, &env).with_platform(Platform::MacOs);
        assert_eq!(resolver.resolve().unwrap(), "/h/mac-out");
    }

    #[test]
    fn resolver_unknown_os_is_platform_unsupported() {
        let rules = MapLookup::default().with_rule(Platform::Linux, "HOME", "Desktop");
        let env = MapEnvironment::new('/').with_var("HOME", "/h");

        let err = DefaultOutputPathResolver::new(&rules, &env)
            .with_os("plan9")
            .resolve()
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::PlatformUnsupported);
        assert!(err.to_string().contains("plan9"));
    }

    #[test]
    fn resolver_known_os_uses_its_rule() {
        let rules = MapLookup::default().with_rule(Platform::Windows, "USERPROFILE", "Desktop");
        let env = MapEnvironment::new('\\').with_var("USERPROFILE", r"C:\Users\bob");

        let resolver = DefaultOutputPathResolver::new(&rules, &env).with_os("windows");
        assert_eq!(resolver.resolve().unwrap(), r"C:\Users\bob\Desktop");
    }

    #[test]
    #[cfg(any(target_os = "linux", target_os = "macos", target_os = "windows"))]
    fn resolver_detects_host_platform() {
        let host = Platform::current().unwrap();
        let rules = MapLookup::default().with_rule(host, "BASE", "out");
        let env = MapEnvironment::new('/').with_var("BASE", "/base");

        let resolver = DefaultOutputPathResolver::new(&rules, &env);
        assert_eq!(resolver.resolve().unwrap(), "/base/out");
    }
}
