use crate::report::aggregate::{GroupStat, Totals};
use crate::results::flatten::{StatusKind, TestRecord};

// ============================================================================
// HTML renderer — self-contained dashboard document
// ============================================================================

/// Pass-rate ring geometry: radius of the SVG circle.
const RING_RADIUS: f64 = 55.0;

/// Generate the self-contained HTML dashboard.
///
/// Features:
/// - Summary cards for total/passed/failed/skipped/flaky/duration
/// - SVG pass-rate ring with three-tier severity coloring
/// - Per-group segmented pass/fail/skip bars
/// - Full per-test detail table
/// - Inline CSS and SVG only (viewable offline, no external fetches)
///
/// Pure function: the caller supplies the formatted generation timestamp,
/// so identical inputs always produce an identical document.
pub fn render_dashboard(
    totals: &Totals,
    groups: &[GroupStat],
    records: &[TestRecord],
    timestamp: &str,
) -> String {
    format!(
        r##"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8" />
<meta name="viewport" content="width=device-width, initial-scale=1.0" />
<title>Playwright Test Dashboard</title>
<style>
{css}
</style>
</head>
<body>

<div class="header">
  <h1>Playwright Test Dashboard</h1>
  <p class="meta">Last run: {timestamp}</p>
</div>

{cards}
{ring}
<div class="section">
  <h2>Suite Breakdown</h2>
{suite_rows}</div>

<div class="section">
  <h2>Test Details</h2>
  <table>
    <thead><tr><th>Suite</th><th>Test</th><th>Status</th><th>Duration</th></tr></thead>
    <tbody>
{detail_rows}    </tbody>
  </table>
</div>

<div class="footer">
  Generated by playwright-dashboard from the runner's JSON results
</div>

</body>
</html>"##,
        css = STYLESHEET,
        timestamp = escape_html(timestamp),
        cards = summary_cards(totals),
        ring = pass_rate_ring(totals),
        suite_rows = suite_breakdown(groups),
        detail_rows = detail_table_rows(records),
    )
}

/// Summary cards: the six headline figures.
fn summary_cards(totals: &Totals) -> String {
    let c = &totals.counts;
    format!(
        r#"<div class="cards">
  <div class="card"><div class="value">{total}</div><div class="label">Total Tests</div></div>
  <div class="card passed"><div class="value">{passed}</div><div class="label">Passed</div></div>
  <div class="card failed"><div class="value">{failed}</div><div class="label">Failed</div></div>
  <div class="card skipped"><div class="value">{skipped}</div><div class="label">Skipped</div></div>
  <div class="card flaky"><div class="value">{flaky}</div><div class="label">Flaky</div></div>
  <div class="card duration"><div class="value">{duration:.1}s</div><div class="label">Duration</div></div>
</div>
"#,
        total = c.total,
        passed = c.passed,
        failed = c.failed,
        skipped = c.skipped,
        flaky = c.flaky,
        duration = totals.duration_seconds,
    )
}

/// SVG progress ring whose stroke offset encodes exactly the pass rate.
///
/// Severity tiers: green at 100%, yellow from 80 to 99, red below 80.
fn pass_rate_ring(totals: &Totals) -> String {
    let pct = totals.pass_rate_pct();
    let circumference = 2.0 * std::f64::consts::PI * RING_RADIUS;
    let offset = circumference - (pct as f64 / 100.0) * circumference;

    let color = if pct == 100 {
        "var(--green)"
    } else if pct >= 80 {
        "var(--yellow)"
    } else {
        "var(--red)"
    };

    format!(
        r#"<div class="pass-rate">
  <div class="progress-ring">
    <svg width="140" height="140" viewBox="0 0 140 140">
      <circle class="track" cx="70" cy="70" r="{r}" />
      <circle class="fill" cx="70" cy="70" r="{r}" stroke="{color}" stroke-dasharray="{c:.2}" stroke-dashoffset="{offset:.2}" />
    </svg>
    <span class="pct">{pct}%</span>
  </div>
  <p class="meta ring-label">Pass Rate</p>
</div>
"#,
        r = RING_RADIUS,
        color = color,
        c = circumference,
        offset = offset,
        pct = pct,
    )
}

/// One segmented bar row per group, in first-seen order.
///
/// Segments are sized as the status's share of the group total; a status
/// with no entries renders no segment at all. Flaky tests are in the
/// group's counters but not separately segmented.
fn suite_breakdown(groups: &[GroupStat]) -> String {
    let mut rows = String::new();
    for group in groups {
        let c = &group.counts;

        let mut segments = String::new();
        for (count, class) in [(c.passed, "p"), (c.failed, "f"), (c.skipped, "s")] {
            if count > 0 {
                let width = count as f64 / c.total as f64 * 100.0;
                segments.push_str(&format!(
                    r#"<div class="seg {class}" style="width:{width:.1}%"></div>"#,
                    class = class,
                    width = width,
                ));
            }
        }

        rows.push_str(&format!(
            r#"  <div class="suite-row">
    <span class="suite-name">{name}</span>
    <div class="suite-bar">{segments}</div>
    <span class="suite-count">{passed}/{total}</span>
  </div>
"#,
            name = escape_html(&group.name),
            segments = segments,
            passed = c.passed,
            total = c.total,
        ));
    }
    rows
}

/// One detail row per test, in flattener order.
fn detail_table_rows(records: &[TestRecord]) -> String {
    let mut rows = String::new();
    for record in records {
        rows.push_str(&format!(
            "      <tr><td>{group}</td><td>{title}</td><td>{badge}</td><td>{duration:.2}s</td></tr>\n",
            group = escape_html(&record.group),
            title = escape_html(&record.title),
            badge = status_badge(record.status),
            duration = record.duration_ms / 1000.0,
        ));
    }
    rows
}

/// Status badge markup. Unknown renders as skip.
fn status_badge(status: StatusKind) -> &'static str {
    match status {
        StatusKind::Passed => r#"<span class="badge pass">PASS</span>"#,
        StatusKind::Failed => r#"<span class="badge fail">FAIL</span>"#,
        StatusKind::Flaky => r#"<span class="badge flaky">FLAKY</span>"#,
        StatusKind::Skipped | StatusKind::Unknown => r#"<span class="badge skip">SKIP</span>"#,
    }
}

/// Escape HTML special characters.
///
/// Applied to every dynamic value interpolated into the document; test
/// titles and suite names come from arbitrary upstream source files.
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Inline stylesheet: dark theme, no external fonts or assets.
const STYLESHEET: &str = r#"  :root {
    --bg: #0d1117;
    --surface: #161b22;
    --border: #30363d;
    --text: #e6edf3;
    --muted: #8b949e;
    --green: #3fb950;
    --red: #f85149;
    --yellow: #d29922;
    --blue: #58a6ff;
    --purple: #bc8cff;
  }
  *, *::before, *::after { box-sizing: border-box; margin: 0; padding: 0; }
  body {
    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Helvetica, Arial, sans-serif;
    background: var(--bg);
    color: var(--text);
    line-height: 1.5;
    padding: 2rem;
    max-width: 1100px;
    margin: 0 auto;
  }

  /* Header */
  .header { text-align: center; margin-bottom: 2rem; }
  .header h1 { font-size: 1.75rem; margin-bottom: .25rem; }
  .header .meta { color: var(--muted); font-size: .85rem; }

  /* Summary cards */
  .cards { display: grid; grid-template-columns: repeat(auto-fit, minmax(140px, 1fr)); gap: 1rem; margin-bottom: 2rem; }
  .card {
    background: var(--surface);
    border: 1px solid var(--border);
    border-radius: 8px;
    padding: 1.25rem;
    text-align: center;
  }
  .card .value { font-size: 2rem; font-weight: 700; }
  .card .label { color: var(--muted); font-size: .8rem; text-transform: uppercase; letter-spacing: .05em; }
  .card.passed .value { color: var(--green); }
  .card.failed .value { color: var(--red); }
  .card.skipped .value { color: var(--yellow); }
  .card.flaky .value { color: var(--purple); }
  .card.duration .value { color: var(--blue); }

  /* Pass rate ring */
  .pass-rate { text-align: center; margin-bottom: 2rem; }
  .progress-ring { display: inline-block; position: relative; width: 140px; height: 140px; }
  .progress-ring svg { transform: rotate(-90deg); }
  .progress-ring .track { fill: none; stroke: var(--border); stroke-width: 10; }
  .progress-ring .fill { fill: none; stroke-width: 10; stroke-linecap: round; }
  .progress-ring .pct {
    position: absolute; top: 50%; left: 50%; transform: translate(-50%, -50%);
    font-size: 1.6rem; font-weight: 700;
  }
  .ring-label { margin-top: .5rem; }

  /* Sections */
  .section { margin-bottom: 2rem; }
  .section h2 { font-size: 1.15rem; margin-bottom: .75rem; border-bottom: 1px solid var(--border); padding-bottom: .35rem; }

  /* Suite bars */
  .suite-row { display: flex; align-items: center; gap: .75rem; margin-bottom: .5rem; }
  .suite-name { width: 130px; font-size: .85rem; text-align: right; flex-shrink: 0; }
  .suite-bar { flex: 1; height: 22px; background: var(--border); border-radius: 4px; overflow: hidden; display: flex; }
  .suite-bar .seg { height: 100%; }
  .suite-bar .seg.p { background: var(--green); }
  .suite-bar .seg.f { background: var(--red); }
  .suite-bar .seg.s { background: var(--yellow); }
  .suite-count { font-size: .8rem; color: var(--muted); width: 50px; flex-shrink: 0; }

  /* Detail table */
  table { width: 100%; border-collapse: collapse; font-size: .85rem; }
  th { text-align: left; color: var(--muted); font-weight: 600; border-bottom: 2px solid var(--border); padding: .5rem .75rem; }
  td { padding: .5rem .75rem; border-bottom: 1px solid var(--border); }
  .badge {
    display: inline-block; padding: 2px 8px; border-radius: 10px; font-size: .75rem; font-weight: 600;
  }
  .badge.pass { background: rgba(63,185,80,.15); color: var(--green); }
  .badge.fail { background: rgba(248,81,73,.15); color: var(--red); }
  .badge.skip { background: rgba(210,153,34,.15); color: var(--yellow); }
  .badge.flaky { background: rgba(188,140,255,.15); color: var(--purple); }
  tr:hover { background: rgba(88,166,255,.04); }

  /* Footer */
  .footer { text-align: center; color: var(--muted); font-size: .75rem; margin-top: 2rem; padding-top: 1rem; border-top: 1px solid var(--border); }"#;
