use maud::{html, Markup, PreEscaped, DOCTYPE};

const STYLES: &str = r#"
body { margin: 0; min-height: 100vh; background-color: #f9fafb; font-family: system-ui, sans-serif; color: #111827; }
header.site { background-color: white; box-shadow: 0 1px 3px rgba(0,0,0,0.1); margin-bottom: 2rem; }
.container { max-width: 1200px; margin: 0 auto; padding: 0 1.5rem; }
.card { background-color: white; border-radius: 8px; box-shadow: 0 1px 3px rgba(0,0,0,0.1); padding: 1.5rem; margin-bottom: 1.5rem; }
.field label { display: block; font-size: 0.875rem; font-weight: 500; color: #374151; margin-bottom: 0.5rem; }
.field input, .field select, .field textarea { width: 100%; padding: 0.5rem 0.75rem; border: 1px solid #d1d5db; border-radius: 6px; font-size: 0.875rem; box-sizing: border-box; }
.grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(250px, 1fr)); gap: 1rem; margin-bottom: 1rem; }
.btn { color: white; padding: 0.5rem 1.25rem; border-radius: 6px; border: none; font-size: 0.875rem; font-weight: 500; cursor: pointer; }
.btn[disabled] { background-color: #9ca3af !important; cursor: not-allowed; }
.btn-blue { background-color: #2563eb; } .btn-green { background-color: #16a34a; } .btn-gray { background-color: #6b7280; }
.badge { padding: 0.25rem 0.5rem; border-radius: 12px; font-size: 0.75rem; font-weight: 500; }
.muted { color: #6b7280; }
.notice { padding: 0.75rem 1rem; border-radius: 6px; margin-bottom: 1.5rem; }
.notice-info { background-color: #dcfce7; color: #166534; } .notice-error { background-color: #fee2e2; color: #991b1b; }
"#;

// A form post blocks until the backend answers, so the clicked button is
// disabled and relabelled on the page the user is looking at.
const BUSY_BUTTONS: &str = r#"
document.addEventListener("submit", function (event) {
  var button = event.submitter;
  if (!button || !button.dataset.busyLabel) return;
  event.target.querySelectorAll("button").forEach(function (b) { b.disabled = true; });
  button.textContent = button.dataset.busyLabel;
});
"#;

pub fn desktop_layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (PreEscaped(STYLES)) }
                script src="https://unpkg.com/htmx.org@1.9.12" defer {}
            }
            body {
                header class="site" {
                    div class="container" style="padding: 1.5rem;" {
                        h1 style="font-size: 2rem; margin: 0 0 0.5rem 0;" {
                            "🏠 Wholesaler AI - Property Prospector"
                        }
                        p class="muted" style="margin: 0;" {
                            "Find motivated sellers with AI-powered insights and personalized messaging"
                        }
                    }
                }
                div class="container" {
                    (content)
                }
                script { (PreEscaped(BUSY_BUTTONS)) }
            }
        }
    }
}
