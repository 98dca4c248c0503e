use crate::models::DayCount;

pub fn render_index(today: &str, latest: &DayCount) -> String {
    fill_template(INDEX_HTML, |key| match key {
        "TODAY" => Some(escape_html(today)),
        "DATE" => Some(escape_html(&latest.date)),
        "RECEIVED" => Some(latest.pallets_received.to_string()),
        "DELIVERED" => Some(latest.pallets_delivered.to_string()),
        _ => None,
    })
}

/// Single pass over `{{KEY}}` placeholders; substituted text is never rescanned.
fn fill_template(template: &str, value: impl Fn(&str) -> Option<String>) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        match after.find("}}").and_then(|end| value(&after[..end]).map(|v| (end, v))) {
            Some((end, filled)) => {
                out.push_str(&filled);
                rest = &after[end + 2..];
            }
            None => {
                out.push_str("{{");
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}

fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Pallet Counter</title>
  <style>
    :root {
      --bg: lightyellow;
      --ink: #2b2a28;
      --accent: lightblue;
      --accent-alt: purple;
    }

    * {
      box-sizing: border-box;
    }

    body {
      display: flex;
      flex-direction: column;
      align-items: center;
      justify-content: center;
      min-height: 100vh;
      margin: 0;
      padding: 0 20px;
      text-align: center;
      font-size: 350%;
      font-family: "Trebuchet MS", sans-serif;
      color: var(--ink);
      background-color: var(--bg);
    }

    h1,
    h2 {
      margin: 0.2em 0;
    }

    .actions {
      display: flex;
      gap: 0.4em;
      flex-wrap: wrap;
      justify-content: center;
    }

    button {
      font-size: 250%;
      cursor: pointer;
    }

    .counter {
      display: flex;
      flex-direction: column;
      align-items: center;
      justify-content: center;
      width: 100%;
      max-width: 1200px;
      margin: 0.4em 0;
    }

    #date-selector {
      font-size: 150%;
      height: 50px;
    }

    .status {
      min-height: 1.4em;
      font-size: 40%;
    }

    .status.error {
      color: #b3261e;
    }

    @media (max-width: 600px) {
      .counter {
        align-items: stretch;
      }
    }
  </style>
</head>
<body>
  <h1>Pallet Counter</h1>
  <h2>Today's Date: {{TODAY}}</h2>

  <div class="actions">
    <button id="received-button" type="button">Received</button>
    <button id="delivered-button" type="button">Delivered</button>
  </div>

  <div class="counter">
    <div>Pallets Received: <span id="palletsReceived-count">{{RECEIVED}}</span></div>
    <div>Pallets Delivered: <span id="palletsDelivered-count">{{DELIVERED}}</span></div>
  </div>

  <div>
    <input type="date" id="date-selector" value="{{DATE}}" />
  </div>
  <div class="status" id="status"></div>

  <script>
    const dateSelector = document.getElementById('date-selector');
    const statusEl = document.getElementById('status');

    const setStatus = (message, tone) => {
      statusEl.textContent = message;
      statusEl.className = tone ? `status ${tone}` : 'status';
    };

    const toggleHighlight = (button) => {
      button.style.backgroundColor =
        button.style.backgroundColor === 'lightblue' ? 'purple' : 'lightblue';
    };

    const fetchJson = async (url) => {
      const res = await fetch(url);
      if (!res.ok) {
        const msg = await res.text();
        throw new Error(msg || 'Request failed');
      }
      return res.json();
    };

    const incrementCounter = async (type) => {
      const date = encodeURIComponent(dateSelector.value);
      const data = await fetchJson(`/${type}?date=${date}`);
      document.getElementById(`${type}-count`).textContent = data.count;
      setStatus('', '');
    };

    const loadCountsForDate = async () => {
      const date = encodeURIComponent(dateSelector.value);
      const data = await fetchJson(`/counts?date=${date}`);
      document.getElementById('palletsReceived-count').textContent = data.palletsReceived;
      document.getElementById('palletsDelivered-count').textContent = data.palletsDelivered;
      setStatus('', '');
    };

    document.getElementById('received-button').addEventListener('click', function () {
      incrementCounter('palletsReceived').catch((err) => setStatus(err.message, 'error'));
      toggleHighlight(this);
    });

    document.getElementById('delivered-button').addEventListener('click', function () {
      incrementCounter('palletsDelivered').catch((err) => setStatus(err.message, 'error'));
      toggleHighlight(this);
    });

    dateSelector.addEventListener('change', () => {
      loadCountsForDate().catch((err) => setStatus(err.message, 'error'));
    });
  </script>
</body>
</html>
"#;
