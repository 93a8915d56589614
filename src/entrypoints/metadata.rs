//! Build metadata generated by shadow-rs, shown in the log and the help window

use shadow_rs::shadow;
use std::fmt;

shadow!(build);

/// Version and source revision the running binary was built from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildInfo {
    pub version: &'static str,
    pub branch: &'static str,
    pub commit: &'static str,
    pub dirty: bool,
    pub built_at: &'static str,
    pub rust_channel: &'static str,
}

impl BuildInfo {
    pub fn current() -> Self {
        Self {
            version: build::PKG_VERSION,
            branch: build::BRANCH,
            commit: build::SHORT_COMMIT,
            dirty: !build::GIT_CLEAN,
            built_at: build::BUILD_TIME_2822,
            rust_channel: build::BUILD_RUST_CHANNEL,
        }
    }

    pub fn log(&self) {
        tracing::info!("{} {self}", super::run::APP_NAME);
        tracing::info!("Build date: {} ({})", self.built_at, self.rust_channel);
    }
}

/// e.g. "0.1.0 (main@1a2b3c4+dirty)"; the revision is omitted outside a git checkout
impl fmt::Display for BuildInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.version)?;
        if !self.commit.is_empty() {
            write!(f, " ({}@{}", self.branch, self.commit)?;
            if self.dirty {
                f.write_str("+dirty")?;
            }
            f.write_str(")")?;
        }
        Ok(())
    }
}
