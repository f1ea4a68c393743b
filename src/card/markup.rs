//! HTML / CSS for the card. Kept as plain strings so the views can be checked
//! without a browser; `card::mod` pushes them into the DOM.

use super::phrases::phrase_for;
use super::state::{CardState, Phase};
use crate::rng::RandomSource;

pub const STYLE_ID: &str = "vc-style";
pub const CARD_ID: &str = "vc-card";
pub const NO_BUTTON_ID: &str = "vc-no";

pub const ACTION_ATTR: &str = "data-action";
pub const ACTION_ACCEPT: &str = "accept";
pub const ACTION_EVADE: &str = "evade";
pub const ACTION_REPLAY: &str = "replay";

/// One decorative background heart.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Heart {
    pub left_pct: f64,
    pub top_pct: f64,
    pub size_rem: f64,
    pub duration_s: f64,
    pub delayed: bool,
}

/// Random scatter: position 0-100%, size 1-4rem, float period 3-8s. Every
/// other heart uses the delayed float animation.
pub fn scatter_hearts(count: usize, rng: &mut dyn RandomSource) -> Vec<Heart> {
    (0..count)
        .map(|i| Heart {
            left_pct: rng.next_unit() * 100.0,
            top_pct: rng.next_unit() * 100.0,
            size_rem: rng.next_unit() * 3.0 + 1.0,
            duration_s: rng.next_unit() * 5.0 + 3.0,
            delayed: i % 2 == 1,
        })
        .collect()
}

pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Page stylesheet. Below `breakpoint_px` only the overlay is visible.
pub fn stylesheet(breakpoint_px: u32) -> String {
    format!(
        r#"
.vc-overlay {{ position:fixed; inset:0; z-index:50; display:flex; flex-direction:column; align-items:center; justify-content:center; padding:24px; text-align:center; background:linear-gradient(135deg,#ffe4e6,#fecdd3); }}
.vc-desktop {{ display:none; min-height:100vh; width:100%; align-items:center; justify-content:center; padding:16px; overflow:hidden; position:relative; box-sizing:border-box; }}
@media (min-width: {breakpoint_px}px) {{
  .vc-overlay {{ display:none; }}
  .vc-desktop {{ display:flex; }}
}}
.vc-glass {{ background:rgba(255,255,255,0.6); backdrop-filter:blur(12px); border:1px solid rgba(255,255,255,0.7); border-radius:24px; box-shadow:0 25px 50px -12px rgba(0,0,0,0.25); }}
.vc-card {{ position:relative; width:100%; max-width:448px; min-height:400px; padding:48px; box-sizing:border-box; text-align:center; display:flex; flex-direction:column; align-items:center; gap:32px; transition:transform .5s ease-in-out; }}
.vc-card:hover {{ transform:scale(1.02); }}
.vc-title {{ font-family:'Great Vibes',cursive; color:#e11d48; font-size:4.5rem; line-height:1.1; margin:0; padding-top:16px; }}
.vc-heart {{ font-size:6rem; color:#f43f5e; animation:vc-heartbeat 1.2s infinite; }}
.vc-buttons {{ display:flex; gap:24px; width:100%; justify-content:center; align-items:center; margin-top:16px; height:80px; }}
.vc-yes {{ background:#f43f5e; color:#fff; font-weight:700; padding:12px 40px; border:none; border-radius:9999px; font-size:1.25rem; cursor:pointer; box-shadow:0 10px 15px -3px rgba(0,0,0,0.1); }}
.vc-yes:hover {{ background:#e11d48; transform:translateY(-4px); }}
.vc-no {{ background:#e5e7eb; color:#4b5563; font-weight:600; padding:12px 40px; border:none; border-radius:9999px; font-size:1.25rem; white-space:nowrap; z-index:50; transition:all .2s ease-out; }}
.vc-accepted {{ display:flex; flex-direction:column; align-items:center; animation:vc-fade-in .7s ease-out; }}
.vc-party {{ font-size:8rem; animation:vc-bounce 1s infinite; }}
.vc-message {{ font-family:sans-serif; font-size:1.25rem; color:#374151; max-width:320px; }}
.vc-replay {{ margin-top:32px; font-size:.875rem; color:#fb7185; background:none; border:none; text-decoration:underline; text-underline-offset:4px; cursor:pointer; }}
.vc-replay:hover {{ color:#e11d48; }}
.vc-bg {{ position:absolute; inset:0; pointer-events:none; overflow:hidden; }}
.vc-bg span {{ position:absolute; color:#fda4af; opacity:.2; animation-name:vc-float; animation-iteration-count:infinite; animation-timing-function:ease-in-out; }}
.vc-bg span.vc-delayed {{ animation-delay:2s; }}
.vc-footer {{ position:absolute; bottom:16px; color:rgba(159,18,57,0.4); font-size:.875rem; font-family:sans-serif; }}
@keyframes vc-heartbeat {{ 0%,100% {{ transform:scale(1); }} 15% {{ transform:scale(1.15); }} 30% {{ transform:scale(1); }} 45% {{ transform:scale(1.1); }} }}
@keyframes vc-float {{ 0%,100% {{ transform:translateY(0); }} 50% {{ transform:translateY(-20px); }} }}
@keyframes vc-bounce {{ 0%,100% {{ transform:translateY(-8%); }} 50% {{ transform:translateY(0); }} }}
@keyframes vc-fade-in {{ from {{ opacity:0; transform:scale(.9); }} to {{ opacity:1; transform:scale(1); }} }}
"#
    )
}

pub fn overlay_markup() -> String {
    concat!(
        "<div class='vc-overlay'>",
        "<div class='vc-glass' style='width:100%;max-width:384px;padding:32px;'>",
        "<div style='font-size:4rem;'>💻</div>",
        "<h2 class='vc-title' style='font-size:3rem;'>Oh no!</h2>",
        "<p class='vc-message'>Please view this on a laptop or computer for the best experience.",
        "<br><span style='display:block;margin-top:8px;font-size:.875rem;color:#f43f5e;'>(The magic needs a mouse! 🖱️)</span></p>",
        "</div></div>"
    )
    .to_string()
}

fn hearts_markup(hearts: &[Heart]) -> String {
    let mut out = String::from("<div class='vc-bg'>");
    for h in hearts {
        out.push_str(&format!(
            "<span class='{}' style='left:{:.2}%;top:{:.2}%;font-size:{:.2}rem;animation-duration:{:.2}s;'>♥</span>",
            if h.delayed { "vc-delayed" } else { "" },
            h.left_pct,
            h.top_pct,
            h.size_rem,
            h.duration_s,
        ));
    }
    out.push_str("</div>");
    out
}

/// Everything mounted into the host element: overlay, background, the empty
/// card container and the footer. The card body is filled by [`card_body`].
pub fn shell_markup(hearts: &[Heart]) -> String {
    format!(
        "{overlay}<div class='vc-desktop'>{bg}<div id='{CARD_ID}' class='vc-glass vc-card'></div><footer class='vc-footer'>Made with ❤️</footer></div>",
        overlay = overlay_markup(),
        bg = hearts_markup(hearts),
    )
}

/// Inner HTML of the card for the current phase.
pub fn card_body<S: AsRef<str>>(state: &CardState, phrases: &[S]) -> String {
    match state.phase() {
        Phase::Question => format!(
            "<div class='vc-heart'>♥</div>\
             <h1 class='vc-title'>Will you be my Valentine?</h1>\
             <div class='vc-buttons'>\
             <button class='vc-yes' {ACTION_ATTR}='{ACTION_ACCEPT}'>Yes ✨</button>\
             <button id='{NO_BUTTON_ID}' class='vc-no' {ACTION_ATTR}='{ACTION_EVADE}' style='{style}'>{label}</button>\
             </div>",
            style = state.placement().to_css(),
            label = escape_html(phrase_for(phrases, state.evasion_count())),
        ),
        Phase::Accepted => format!(
            "<div class='vc-accepted'>\
             <div class='vc-party'>🥳</div>\
             <h1 class='vc-title'>Yayyy!</h1>\
             <p class='vc-message'>I knew you'd say yes! <br>Can't wait to spend the day with you. ❤️</p>\
             <button class='vc-replay' {ACTION_ATTR}='{ACTION_REPLAY}'>Play again</button>\
             </div>"
        ),
    }
}
