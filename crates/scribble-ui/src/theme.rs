//! Color palettes and the built-in stylesheet

use std::fmt::Write as _;

/// Color palette for the application
#[derive(Debug, Clone, Copy)]
pub struct ColorPalette {
    pub bg_primary: &'static str,
    pub bg_secondary: &'static str,
    pub bg_muted: &'static str,
    pub text_primary: &'static str,
    pub text_muted: &'static str,
    pub border: &'static str,
    pub accent: &'static str,
    pub accent_text: &'static str,
    pub error: &'static str,
}

/// Light theme colors
pub const LIGHT_PALETTE: ColorPalette = ColorPalette {
    bg_primary: "#ffffff",
    bg_secondary: "#f1f3f4",
    bg_muted: "#f8f9fa",
    text_primary: "#1a1a1a",
    text_muted: "#5f6368",
    border: "#dadce0",
    accent: "#4f46e5",
    accent_text: "#ffffff",
    error: "#dc2626",
};

/// Dark theme colors
pub const DARK_PALETTE: ColorPalette = ColorPalette {
    bg_primary: "#1a1a1a",
    bg_secondary: "#2d2d2d",
    bg_muted: "#242424",
    text_primary: "#e8eaed",
    text_muted: "#9aa0a6",
    border: "#3c4043",
    accent: "#818cf8",
    accent_text: "#1a1a1a",
    error: "#f87171",
};

impl ColorPalette {
    fn write_variables(&self, out: &mut String) {
        let variables = [
            ("--bg-primary", self.bg_primary),
            ("--bg-secondary", self.bg_secondary),
            ("--bg-muted", self.bg_muted),
            ("--text-primary", self.text_primary),
            ("--text-muted", self.text_muted),
            ("--border", self.border),
            ("--accent", self.accent),
            ("--accent-text", self.accent_text),
            ("--error", self.error),
        ];
        for (name, value) in variables {
            let _ = write!(out, "{name}:{value};");
        }
    }
}

/// CSS variables for both palettes.
///
/// `data-theme="system"` follows `prefers-color-scheme`.
pub fn theme_css() -> String {
    let mut css = String::from(":root,[data-theme=\"light\"]{");
    LIGHT_PALETTE.write_variables(&mut css);
    css.push_str("}[data-theme=\"dark\"]{");
    DARK_PALETTE.write_variables(&mut css);
    css.push_str("}@media (prefers-color-scheme: dark){[data-theme=\"system\"]{");
    DARK_PALETTE.write_variables(&mut css);
    css.push_str("}}");
    css
}

/// Component styles shared by every page.
pub const STYLES: &str = r"
* { box-sizing: border-box; }
body { margin: 0; font-family: system-ui, -apple-system, sans-serif; background: var(--bg-primary); color: var(--text-primary); }
a { color: inherit; }
.sr-only { position: absolute; width: 1px; height: 1px; overflow: hidden; clip: rect(0 0 0 0); white-space: nowrap; }

.layout { display: flex; flex-direction: column; height: 100vh; overflow: hidden; }
.layout-header { width: 100%; background: var(--bg-secondary); padding: 8px; }
.layout-nav { display: flex; flex-wrap: wrap; align-items: center; justify-content: space-between; gap: 8px; }
.layout-search { margin-left: auto; max-width: 24rem; flex: 1; }
.layout-search-mobile { display: none; width: 100%; }
.layout-body { display: flex; flex-grow: 1; overflow: hidden; }
@media (max-width: 640px) {
    .layout-nav { flex-wrap: wrap; }
    .layout-search { display: none; }
    .layout-search-mobile { display: block; }
}

.logo { display: flex; width: 40px; height: 40px; align-items: center; justify-content: center; border-radius: 6px; background: var(--accent); color: var(--accent-text); font-size: 18px; }

.sidebar { width: 16rem; flex-shrink: 0; overflow-y: auto; background: var(--bg-muted); padding-top: 16px; }
.sidebar-title { padding: 12px 8px; font-size: 1.25rem; font-weight: 700; margin: 0; }
.sidebar-list { list-style: none; margin: 0; padding: 0 0 48px; overflow-x: hidden; }
.sidebar-nav-item { display: block; padding: 8px; text-decoration: none; overflow: hidden; display: -webkit-box; -webkit-line-clamp: 2; -webkit-box-orient: vertical; }
.sidebar-nav-item--active { background: var(--bg-secondary); }

.main { position: relative; height: 100%; flex-grow: 1; overflow-y: auto; padding: 0 16px 16px; }
.main-title { position: sticky; top: 0; margin: 0 -16px 8px; padding: 4px 16px; border-bottom: 1px solid var(--border); background: var(--bg-primary); }
.main-content { display: flex; height: 100%; flex-direction: column; }
.floating-toolbar { position: sticky; bottom: 0; display: flex; align-items: center; justify-content: flex-end; gap: 8px; padding: 16px 16px 16px 20px; border-radius: 8px; background: var(--bg-muted); backdrop-filter: blur(4px); }

.ui-button { display: inline-flex; align-items: center; gap: 8px; border-radius: 6px; padding: 8px 12px; font-size: 14px; font-weight: 600; border: 1px solid transparent; cursor: pointer; text-decoration: none; }
.ui-button--primary { background: var(--accent); color: var(--accent-text); }
.ui-button--outline { background: var(--bg-primary); color: var(--text-primary); border-color: var(--border); }
.ui-button--ghost { background: transparent; color: var(--text-primary); }
.ui-button--destructive { background: var(--error); color: #ffffff; }

.ui-label { font-size: 14px; font-weight: 500; line-height: 1; }
.ui-input, .ui-textarea { display: flex; width: 100%; border: 1px solid var(--border); border-radius: 6px; padding: 8px 12px; font-size: 14px; background: var(--bg-primary); color: var(--text-primary); }
.ui-textarea { min-height: 80px; }
.ui-input[aria-invalid], .ui-textarea[aria-invalid] { border-color: var(--error); }
.ui-checkbox { display: flex; align-items: center; gap: 4px; }
.ui-checkbox-input { width: 16px; height: 16px; }
.ui-checkbox-label { font-size: 12px; color: var(--text-muted); }

.field-errors { min-height: 32px; padding: 4px 16px 12px; }
.error-list { display: flex; flex-direction: column; gap: 4px; margin: 0; padding: 0; list-style: none; }
.error-list-item { font-size: 10px; color: var(--error); }

.dropdown { position: relative; }
.dropdown > summary { list-style: none; }
.dropdown-content { position: absolute; right: 0; margin-top: 8px; min-width: 10rem; padding: 4px; list-style: none; border: 1px solid var(--border); border-radius: 6px; background: var(--bg-primary); z-index: 10; }
.dropdown-item { display: block; width: 100%; padding: 6px 8px; text-align: left; background: none; border: none; color: inherit; text-decoration: none; cursor: pointer; }
.dropdown-separator { height: 1px; margin: 4px 0; background: var(--border); }
.avatar { width: 32px; height: 32px; border-radius: 9999px; object-fit: cover; }

.icon { display: inline-flex; align-items: center; gap: 6px; }
.search-bar { display: flex; gap: 4px; }
.search-bar-input { flex: 1; }
.theme-switch { display: flex; }
.logo-link { display: flex; align-items: center; gap: 8px; text-decoration: none; }
.error-boundary { padding: 32px; }

.empty-state { color: var(--text-muted); padding: 16px 0; }
.note-content { white-space: pre-wrap; line-height: 1.5; }
.note-editor { display: flex; flex-direction: column; gap: 4px; height: 100%; }
.ui-checkbox-field { display: flex; flex-direction: column; }
.index-actions { display: flex; gap: 8px; }
.user-list { display: grid; grid-template-columns: repeat(auto-fill, minmax(12rem, 1fr)); gap: 12px; margin: 16px 0 0; padding: 0; list-style: none; }
.user-card { display: flex; flex-direction: column; align-items: center; gap: 4px; padding: 16px; border-radius: 8px; background: var(--bg-muted); text-decoration: none; }
.user-card-username { font-size: 12px; color: var(--text-muted); }
.profile { display: flex; flex-direction: column; align-items: center; gap: 8px; padding: 32px 0; }
.profile-avatar { width: 128px; height: 128px; border-radius: 9999px; object-fit: cover; }
.profile-joined { color: var(--text-muted); margin: 0; }
";

/// Client-side enhancements for server-rendered links.
///
/// Links marked `data-prefetch="intent"` get a `<link rel="prefetch">` on
/// hover or focus; links marked `data-prevent-scroll-reset` keep the
/// sidebar's scroll offset across the navigation they trigger.
pub const CLIENT_SCRIPT: &str = r#"
(function () {
  var prefetched = new Set();
  function prefetch(event) {
    var link = event.target.closest && event.target.closest('a[data-prefetch="intent"]');
    if (!link || prefetched.has(link.href)) return;
    prefetched.add(link.href);
    var hint = document.createElement("link");
    hint.rel = "prefetch";
    hint.href = link.href;
    document.head.appendChild(hint);
  }
  document.addEventListener("click", function (event) {
    var trigger = event.target.closest && event.target.closest("[data-submit-form]");
    if (!trigger) return;
    var form = document.getElementById(trigger.getAttribute("data-submit-form"));
    if (!form) return;
    event.preventDefault();
    form.requestSubmit();
  });
  document.addEventListener("mouseover", prefetch);
  document.addEventListener("focusin", prefetch);
  document.addEventListener("click", function (event) {
    var link = event.target.closest && event.target.closest("a[data-prevent-scroll-reset]");
    var sidebar = document.querySelector(".sidebar");
    if (link && sidebar) sessionStorage.setItem("sidebar-scroll", String(sidebar.scrollTop));
  });
  window.addEventListener("DOMContentLoaded", function () {
    var saved = sessionStorage.getItem("sidebar-scroll");
    var sidebar = document.querySelector(".sidebar");
    if (saved !== null && sidebar) sidebar.scrollTop = Number(saved);
    sessionStorage.removeItem("sidebar-scroll");
  });
})();
"#;
