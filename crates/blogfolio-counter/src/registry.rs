//! Persisted set of seen visitor fingerprints and the unique-visitor count.
//!
//! Every read treats a missing or malformed value as empty/zero. Two clients
//! sharing one store can race on the increment; the count is best-effort.

use blogfolio_page::PageContext;
use blogfolio_store::{get_json, get_parsed, keys, set_json};
use chrono::NaiveDate;

use crate::fingerprint::VisitorFingerprint;
use crate::format::format_view_count;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisitOutcome {
    /// Count after this visit was resolved.
    pub count: u64,
    pub incremented: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrySnapshot {
    pub count: u64,
    pub visitor_ids: usize,
    /// True when this session has not resolved its visitor status.
    pub is_new_session: bool,
}

fn load_visitors(ctx: &PageContext) -> Vec<String> {
    get_json(ctx.local.as_ref(), keys::VISITORS).unwrap_or_default()
}

fn load_count(ctx: &PageContext) -> u64 {
    get_parsed(ctx.local.as_ref(), keys::VIEW_COUNT).unwrap_or(0)
}

/// Resolve the current page load: count the visitor once if neither this
/// session nor the fingerprint has been seen before.
pub fn record_visit(ctx: &mut PageContext, fingerprint: &VisitorFingerprint) -> VisitOutcome {
    let mut visitors = load_visitors(ctx);
    let session_marker = ctx.session.get(keys::CURRENT_SESSION);

    let mut incremented = false;
    if session_marker.is_none() && !visitors.iter().any(|v| v == fingerprint.as_str()) {
        visitors.push(fingerprint.as_str().to_string());
        set_json(ctx.local.as_mut(), keys::VISITORS, &visitors);
        ctx.session.set(keys::CURRENT_SESSION, fingerprint.as_str());
        incremented = true;
    }

    let mut count = load_count(ctx);
    if incremented {
        count += 1;
        ctx.local.set(keys::VIEW_COUNT, &count.to_string());
        tracing::info!("new unique visitor {}, count now {}", fingerprint, count);
    } else {
        tracing::debug!("visitor {} already counted", fingerprint);
    }

    VisitOutcome { count, incremented }
}

/// Forget every visitor, zero the count and the visible counter. Idempotent.
pub fn reset(ctx: &mut PageContext) {
    ctx.local.set(keys::VIEW_COUNT, "0");
    set_json(ctx.local.as_mut(), keys::VISITORS, &Vec::<String>::new());
    ctx.session.remove(keys::CURRENT_SESSION);
    ctx.counter.set_text(format_view_count(0));
    tracing::info!("visitor registry reset");
}

pub fn snapshot(ctx: &PageContext) -> RegistrySnapshot {
    RegistrySnapshot {
        count: load_count(ctx),
        visitor_ids: load_visitors(ctx).len(),
        is_new_session: ctx.session.get(keys::CURRENT_SESSION).is_none(),
    }
}

/// Stored first-visit date, written as `today` the first time it is asked for.
pub fn first_visit_date(ctx: &mut PageContext, today: NaiveDate) -> String {
    if let Some(date) = ctx.local.get(keys::FIRST_VISIT) {
        return date;
    }
    let date = locale_date(today);
    ctx.local.set(keys::FIRST_VISIT, &date);
    date
}

/// `en-US` short date: `7/4/2025`.
pub fn locale_date(date: NaiveDate) -> String {
    date.format("%-m/%-d/%Y").to_string()
}
