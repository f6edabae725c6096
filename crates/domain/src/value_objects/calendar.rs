//! Season calendar value objects
//!
//! The game runs from March to September (the draft). Each month has fixed
//! banner copy and goals; training is only offered in some months.

use serde::{Deserialize, Serialize};

/// Months in which the training form is offered.
pub const TRAINABLE_MONTHS: [u32; 3] = [4, 6, 7];

pub fn is_training_month(month: u32) -> bool {
    TRAINABLE_MONTHS.contains(&month)
}

/// Static banner copy for one month of the season.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthCopy {
    pub month: u32,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub goals: &'static [&'static str],
}

impl MonthCopy {
    /// CSS class selecting the banner background for this month.
    pub fn background_class(&self) -> String {
        format!("month-bg-{}", self.month)
    }
}

const MONTH_TABLE: [MonthCopy; 7] = [
    MonthCopy {
        month: 3,
        title: "3월 - 시즌 준비",
        subtitle: "드래프트까지 7개월! 민석이와 친밀도를 쌓고 기초 체력을 다지세요.",
        goals: &["친밀도 20 이상", "체력 60 이상"],
    },
    MonthCopy {
        month: 4,
        title: "4월 - 본격 시작",
        subtitle: "시즌이 시작되었습니다. 민석이의 훈련을 도와주세요.",
        goals: &["친밀도 40 이상", "멘탈 60 이상"],
    },
    MonthCopy {
        month: 5,
        title: "5월 - 시즌 중반",
        subtitle: "시즌이 본격화되고 있습니다. 체력과 멘탈 관리가 중요해요.",
        goals: &["체력 70 이상", "멘탈 65 이상", "친밀도 55 이상"],
    },
    MonthCopy {
        month: 6,
        title: "6월 - 중요한 시기",
        subtitle: "드래프트까지 절반! 전력 향상에 집중할 시간입니다.",
        goals: &["힘 50 이상", "주루 50 이상", "친밀도 70 이상"],
    },
    MonthCopy {
        month: 7,
        title: "7월 - 여름 훈련",
        subtitle: "더운 날씨지만 훈련 강도를 높여야 합니다. 스트레스 관리도 필수!",
        goals: &["체력 80 이상", "멘탈 75 이상", "힘 65 이상"],
    },
    MonthCopy {
        month: 8,
        title: "8월 - 막바지 준비",
        subtitle: "드래프트가 한 달 앞으로! 마지막 점검이 필요합니다.",
        goals: &["모든 스탯 70 이상", "친밀도 85 이상"],
    },
    MonthCopy {
        month: 9,
        title: "9월 - 드래프트 직전",
        subtitle: "드래프트가 곧 시작됩니다! 민석이와 함께한 시간을 돌아보세요.",
        goals: &["최종 점검", "드래프트 준비 완료"],
    },
];

/// Looks up the banner copy for a month; `None` outside March..=September.
pub fn month_copy(month: u32) -> Option<&'static MonthCopy> {
    MONTH_TABLE.iter().find(|copy| copy.month == month)
}

/// A monthly guide card (title, message, goals).
///
/// Sent by the server when a month starts; the March guide is built locally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthGuide {
    pub title: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub goals: Vec<String>,
}

impl MonthGuide {
    pub fn for_month(month: u32) -> Option<Self> {
        month_copy(month).map(|copy| Self {
            title: copy.title.to_string(),
            message: copy.subtitle.to_string(),
            goals: copy.goals.iter().map(|g| g.to_string()).collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn training_months() {
        assert!(is_training_month(4));
        assert!(is_training_month(6));
        assert!(is_training_month(7));
        assert!(!is_training_month(3));
        assert!(!is_training_month(5));
        assert!(!is_training_month(9));
    }

    #[test]
    fn month_copy_covers_the_season() {
        for month in 3..=9 {
            let copy = month_copy(month).expect("season month");
            assert!(copy.title.starts_with(&format!("{month}월")));
        }
        assert!(month_copy(2).is_none());
        assert!(month_copy(10).is_none());
        assert_eq!(month_copy(5).unwrap().background_class(), "month-bg-5");
    }

    #[test]
    fn march_guide_is_built_from_the_table() {
        let guide = MonthGuide::for_month(3).unwrap();
        assert_eq!(guide.title, "3월 - 시즌 준비");
        assert_eq!(guide.goals, vec!["친밀도 20 이상", "체력 60 이상"]);
    }
}
