use std::fmt::{Display, Formatter};
use std::str::FromStr;

use memberpoint_core::AppError;
use serde::{Deserialize, Serialize};

/// External identity provider a membership is issued for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MembershipKind {
    /// Naver social login.
    Naver,
    /// Kakao social login.
    Kakao,
    /// LINE social login.
    Line,
}

impl MembershipKind {
    /// Returns every supported kind in declaration order.
    #[must_use]
    pub fn all() -> [Self; 3] {
        [Self::Naver, Self::Kakao, Self::Line]
    }

    /// Returns the wire and storage name for this kind.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Naver => "NAVER",
            Self::Kakao => "KAKAO",
            Self::Line => "LINE",
        }
    }
}

impl Display for MembershipKind {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl FromStr for MembershipKind {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "NAVER" => Ok(Self::Naver),
            "KAKAO" => Ok(Self::Kakao),
            "LINE" => Ok(Self::Line),
            _ => Err(AppError::Validation(format!(
                "unknown membership kind '{value}'"
            ))),
        }
    }
}
