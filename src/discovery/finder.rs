use memchr::{memchr_iter, memmem};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::{
    core::constants::matching,
    core::error::{RelinkError, Result},
    core::types::{IncludeReference, MoveRequest},
    discovery::path_utils::{basename, to_forward_slashes},
};

use std::fmt;
use std::str::FromStr;

static INCLUDE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(matching::INCLUDE_TOKEN_PATTERN).expect("Failed to compile include token pattern")
});

/// How an include token is compared against the path of the moved file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchMode {
    /// Final path component only. Same-named files in other directories match too.
    /// Both `/` and `\` split the token, so `win\bar.h` matches `bar.h` on every platform.
    #[default]
    Basename,
    /// The whole token, with `\` read as `/`, must equal the old path.
    FullPath,
}

impl MatchMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchMode::Basename => matching::BASENAME,
            MatchMode::FullPath => matching::FULL_PATH,
        }
    }
}

impl fmt::Display for MatchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MatchMode {
    type Err = RelinkError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            matching::BASENAME => Ok(MatchMode::Basename),
            matching::FULL_PATH => Ok(MatchMode::FullPath),
            other => Err(RelinkError::Config(format!(
                "Invalid match mode '{other}'. Expected one of: {}.",
                matching::ALL.join(", ")
            ))),
        }
    }
}

/// Content of a file after its matching references were replaced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewrite {
    pub content: String,
    pub references: usize,
}

pub trait IncludeFinder {
    /// References in `content` that point at the moved file.
    fn find_references(&self, content: &str) -> Vec<IncludeReference>;

    /// Replace every matching reference, or `None` when nothing matched.
    fn rewrite(&self, content: &str) -> Option<Rewrite>;
}

#[derive(Debug, Clone)]
pub struct Finder {
    old_path: String,
    old_basename: String,
    replacement: String,
    mode: MatchMode,
}

impl Finder {
    pub fn new(request: &MoveRequest, mode: MatchMode) -> Self {
        Self {
            old_path: to_forward_slashes(&request.source_path.to_string_lossy()),
            old_basename: request.old_basename(),
            replacement: format!("<{}>", request.include_target()),
            mode,
        }
    }

    pub fn mode(&self) -> MatchMode {
        self.mode
    }

    /// The token every matching reference is replaced with.
    pub fn replacement(&self) -> &str {
        &self.replacement
    }

    /// Whether the text between the delimiters refers to the moved file.
    pub fn is_match(&self, target: &str) -> bool {
        match self.mode {
            MatchMode::Basename => basename(target) == self.old_basename,
            MatchMode::FullPath => to_forward_slashes(target) == self.old_path,
        }
    }

    /// Cheap byte search that rules out files which cannot contain a match.
    fn may_contain_match(&self, content: &str) -> bool {
        // Full-path tokens may spell the directories with backslashes, so only
        // the basename is a reliable needle in either mode.
        memmem::find(content.as_bytes(), self.old_basename.as_bytes()).is_some()
    }

    fn line_of(content: &str, offset: usize) -> u64 {
        memchr_iter(b'\n', &content.as_bytes()[..offset]).count() as u64 + 1
    }
}

impl IncludeFinder for Finder {
    fn find_references(&self, content: &str) -> Vec<IncludeReference> {
        if !self.may_contain_match(content) {
            return Vec::new();
        }

        INCLUDE_REGEX
            .captures_iter(content)
            .filter_map(|caps| {
                let whole = caps.get(0)?;
                let target = caps.get(1)?.as_str();
                if !self.is_match(target) {
                    return None;
                }
                Some(IncludeReference {
                    span: (whole.start(), whole.end()),
                    target: target.to_string(),
                    line: Self::line_of(content, whole.start()),
                })
            })
            .collect()
    }

    fn rewrite(&self, content: &str) -> Option<Rewrite> {
        if !self.may_contain_match(content) {
            return None;
        }

        let mut references = 0;
        let rewritten = INCLUDE_REGEX.replace_all(content, |caps: &Captures| {
            if self.is_match(&caps[1]) {
                references += 1;
                self.replacement.clone()
            } else {
                caps[0].to_string()
            }
        });

        if references == 0 {
            return None;
        }

        Some(Rewrite {
            content: rewritten.into_owned(),
            references,
        })
    }
}
