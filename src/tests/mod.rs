// Native scenario tests: the whole console minus the DOM, driven through
// `App` against an in-memory backend.
mod app_flows;
mod support;
