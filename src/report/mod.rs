//! Build records as delivered by the build host.
//!
//! These types mirror the JSON the host emits for a status change. Fields the
//! formatter needs are kept optional so that one malformed build is reported
//! on its own instead of failing the whole report.

mod build_result;
mod property;
mod users;

pub use build_result::{BuildResult, BuildResults};
pub use property::{Properties, Property};
pub use users::Users;

use serde::{Deserialize, Serialize};

/// A host notification bundling the builds whose status changed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BuildReport {
    #[serde(default)]
    pub builds: Vec<Build>,
}

/// The buildset a build belongs to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Buildset {
    /// Why the buildset was triggered.
    pub reason: Option<String>,
}

/// One execution of a build job.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Build {
    /// Human readable current state.
    pub state_string: Option<String>,
    /// Result code or summary, absent while the build is running.
    pub results: Option<BuildResults>,
    /// Link to the build page.
    pub url: Option<String>,
    pub buildset: Option<Buildset>,
    #[serde(default)]
    pub properties: Properties,
    pub users: Option<Users>,
}

impl Build {
    /// Creates a build with the fields the host always provides.
    pub fn new(
        state_string: impl Into<String>,
        url: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            state_string: Some(state_string.into()),
            url: Some(url.into()),
            buildset: Some(Buildset {
                reason: Some(reason.into()),
            }),
            ..Default::default()
        }
    }

    pub fn with_results(mut self, results: impl Into<BuildResults>) -> Self {
        self.results = Some(results.into());
        self
    }

    pub fn with_property(
        mut self,
        name: impl Into<String>,
        value: impl Into<serde_json::Value>,
        source: impl Into<String>,
    ) -> Self {
        self.properties.insert(name, Property::new(value, source));
        self
    }

    pub fn with_users(mut self, users: Users) -> Self {
        self.users = Some(users);
        self
    }

    /// Reason the buildset was triggered.
    pub fn reason(&self) -> Option<&str> {
        self.buildset.as_ref()?.reason.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_host_report() -> Result<(), serde_json::Error> {
        let content = r#"
        {
            "builds": [
                {
                    "buildid": 42,
                    "state_string": "build successful",
                    "results": 0,
                    "url": "http://ci/build/42",
                    "buildset": { "reason": "scheduler", "bsid": 7 },
                    "properties": {
                        "branch": ["main", "Change"],
                        "buildername": ["linux-x86_64", "Builder"],
                        "revision": [null, "Change"]
                    },
                    "users": ["alice", "bob"]
                },
                {
                    "state_string": "building",
                    "url": "http://ci/build/43",
                    "buildset": { "reason": "force" }
                }
            ]
        }
        "#;
        let report: BuildReport = serde_json::from_str(content)?;
        assert_eq!(report.builds.len(), 2);

        let first = &report.builds[0];
        assert_eq!(first.reason(), Some("scheduler"));
        assert_eq!(first.results, Some(BuildResults::Code(BuildResult::Success)));
        assert_eq!(
            first.properties.branch().map(Property::value_text),
            Some(String::from("main"))
        );
        assert_eq!(
            first.properties.get("revision").map(Property::source),
            Some("Change")
        );
        assert_eq!(
            first.users,
            Some(Users::List(vec![String::from("alice"), String::from("bob")]))
        );

        let second = &report.builds[1];
        assert_eq!(second.results, None);
        assert!(second.properties.is_empty());
        assert_eq!(second.users, None);
        Ok(())
    }

    #[test]
    fn summary_results_do_not_break_the_report() -> Result<(), serde_json::Error> {
        let content = r#"
        {
            "builds": [
                {
                    "state_string": "failed",
                    "results": "failure",
                    "url": "http://ci/build/1",
                    "buildset": { "reason": "force" }
                },
                {
                    "state_string": "build successful",
                    "results": 0,
                    "url": "http://ci/build/2",
                    "buildset": { "reason": "force" }
                }
            ]
        }
        "#;
        let report: BuildReport = serde_json::from_str(content)?;
        assert_eq!(report.builds.len(), 2);
        assert_eq!(report.builds[0].results, Some(BuildResults::from("failure")));
        assert_eq!(
            report.builds[1].results,
            Some(BuildResults::Code(BuildResult::Success))
        );
        Ok(())
    }

    #[test]
    fn missing_required_fields_still_deserialize() -> Result<(), serde_json::Error> {
        let build: Build = serde_json::from_str(r#"{ "state_string": "failed" }"#)?;
        assert_eq!(build.url, None);
        assert_eq!(build.reason(), None);
        Ok(())
    }

    #[test]
    fn empty_report() -> Result<(), serde_json::Error> {
        let report: BuildReport = serde_json::from_str("{}")?;
        assert!(report.builds.is_empty());
        Ok(())
    }
}
