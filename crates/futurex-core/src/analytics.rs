//! Fire-and-forget analytics seam.

use serde_json::{json, Value};

/// Events the site reports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalyticsEvent {
    PageView { url: String },
    Custom { name: String },
}

impl AnalyticsEvent {
    pub fn page_view(url: impl Into<String>) -> Self {
        AnalyticsEvent::PageView { url: url.into() }
    }

    pub fn custom(name: impl Into<String>) -> Self {
        AnalyticsEvent::Custom { name: name.into() }
    }

    pub fn name(&self) -> &'static str {
        match self {
            AnalyticsEvent::PageView { .. } => "predefine_pageview",
            AnalyticsEvent::Custom { .. } => "crawl_api_custom",
        }
    }

    pub fn props(&self) -> Value {
        match self {
            AnalyticsEvent::PageView { url } => json!({ "url": url }),
            AnalyticsEvent::Custom { name } => json!({ "name": name }),
        }
    }
}

/// Sink for analytics events. Implementations must never fail the caller.
pub trait Analytics: Send + Sync {
    fn emit(&self, event: &str, props: &Value);

    fn track(&self, event: &AnalyticsEvent) {
        self.emit(event.name(), &event.props());
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NoopAnalytics;

impl Analytics for NoopAnalytics {
    fn emit(&self, _event: &str, _props: &Value) {}
}

/// Reports events as structured log lines.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingAnalytics;

impl Analytics for TracingAnalytics {
    fn emit(&self, event: &str, props: &Value) {
        tracing::info!(event = %event, props = %props, "analytics");
    }
}
