use anyhow::Context;
use serde_json::json;
use tienda_admin::editor::{EditSession, EditorHost, ToastKind};
use tienda_admin::{AdminConfig, HydrationState, ProfileEditor, logger};

/// Prints what the edit modal would show
struct ConsoleHost;

impl EditorHost for ConsoleHost {
    fn show_loading(&mut self) {
        tracing::info!("Cargando datos...");
    }

    fn hide_loading(&mut self) {}

    fn notify(&mut self, kind: ToastKind, title: &str, message: &str) {
        eprintln!("[{}] {}: {}", kind, title, message);
    }

    fn reveal(&mut self, session: &EditSession) {
        let tiles: Vec<_> = session
            .grid()
            .tiles()
            .iter()
            .map(|tile| {
                json!({
                    "id": tile.id,
                    "label": tile.label,
                    "icon": tile.icon.current_src(),
                    "class": tile.class_name(),
                })
            })
            .collect();

        let view = json!({
            "form": session.form(),
            "selected": session.selected_categories(),
            "categories": tiles,
        });
        match serde_json::to_string_pretty(&view) {
            Ok(text) => println!("{text}"),
            Err(e) => tracing::error!("Failed to print session: {}", e),
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let config = AdminConfig::from_env();
    logger::init_logger_with_file(Some(&config.log_level), config.log_dir.as_deref());

    let store_id: i64 = std::env::args()
        .nth(1)
        .context("usage: tienda-admin <store-id>")?
        .parse()
        .context("store id must be an integer")?;

    let client = config
        .client_config()
        .build_http_client()
        .context("failed to build HTTP client")?;

    let mut editor = ProfileEditor::new(client, ConsoleHost, config.grid_renderer());
    editor.edit_profile(store_id).await;

    if editor.state() == HydrationState::Failed {
        anyhow::bail!("could not load store {store_id}");
    }

    Ok(())
}
