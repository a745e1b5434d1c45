//! Application State Store — one live value per entity kind, owned by the
//! controller. No persistence: everything is lost on restart.

use chrono::Utc;
use serde::Serialize;

use crate::models::{CareerRecommendation, ChatMessage, ChatRole, Profile, SkillSuggestion, TrendReport};
use crate::session::view::{ActiveView, Theme};

/// Append-only chat log with non-decreasing timestamps.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct ChatLog {
    messages: Vec<ChatMessage>,
}

impl ChatLog {
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Appends a message stamped `now_millis`, or the previous stamp if the
    /// clock went backwards.
    pub fn append_at(&mut self, role: ChatRole, text: String, now_millis: i64) -> ChatMessage {
        let timestamp = self
            .messages
            .last()
            .map_or(now_millis, |last| last.timestamp.max(now_millis));
        let message = ChatMessage {
            role,
            text,
            timestamp,
        };
        self.messages.push(message.clone());
        message
    }

    pub fn append(&mut self, role: ChatRole, text: String) -> ChatMessage {
        self.append_at(role, text, Utc::now().timestamp_millis())
    }
}

/// Monotonic request tag. Only the latest issued tag may apply its response.
pub type RequestSeq = u64;

#[derive(Debug, Default)]
pub struct Store {
    pub profile: Profile,
    pub recommendations: Vec<CareerRecommendation>,
    pub skills: Vec<SkillSuggestion>,
    pub chat: ChatLog,
    pub trend_report: Option<TrendReport>,
    pub active_view: ActiveView,
    pub theme: Theme,
    pub loading_recommendations: bool,
    pub loading_skills: bool,
    pub loading_trends: bool,
    submission_seq: RequestSeq,
    trend_seq: RequestSeq,
}

impl Store {
    /// Switches to the recommendations view and raises both loading flags.
    pub fn begin_submission(&mut self) -> RequestSeq {
        self.submission_seq += 1;
        self.active_view = ActiveView::Recommendations;
        self.loading_recommendations = true;
        self.loading_skills = true;
        self.submission_seq
    }

    /// Applies whichever results succeeded and clears both flags, unless a
    /// newer submission was issued meanwhile. Returns whether it applied.
    pub fn finish_submission(
        &mut self,
        seq: RequestSeq,
        recommendations: Option<Vec<CareerRecommendation>>,
        skills: Option<Vec<SkillSuggestion>>,
    ) -> bool {
        if seq != self.submission_seq {
            return false;
        }
        if let Some(recommendations) = recommendations {
            self.recommendations = recommendations;
        }
        if let Some(skills) = skills {
            self.skills = skills;
        }
        self.loading_recommendations = false;
        self.loading_skills = false;
        true
    }

    pub fn begin_trend_query(&mut self) -> RequestSeq {
        self.trend_seq += 1;
        self.loading_trends = true;
        self.trend_seq
    }

    /// A failed query (`None`) keeps the previous report.
    pub fn finish_trend_query(&mut self, seq: RequestSeq, report: Option<TrendReport>) -> bool {
        if seq != self.trend_seq {
            return false;
        }
        if let Some(report) = report {
            self.trend_report = Some(report);
        }
        self.loading_trends = false;
        true
    }
}
