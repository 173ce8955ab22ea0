mod documents;
mod pages;

use std::fs::{self, File};
use std::path::Path;
use std::time::Duration;

use chrono::Local;
use pagedom::{Key, Modifiers};
use pagekit::validation::FieldGroupState;
use pagekit::{
    InteractionConfig, PageInput, PagekitError, Runtime, Toast, install_on_content_loaded,
    show_toast,
};
use simplelog::{Config, LevelFilter, WriteLogger};
use thiserror::Error;
use tokio::sync::mpsc::{self, UnboundedSender};
use tokio::time::sleep;

use crate::documents::DocumentList;

#[derive(Debug, Error)]
enum DemoError {
    #[error("cannot read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot parse {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    #[error(transparent)]
    Pagekit(#[from] PagekitError),
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, DemoError> {
    let text = fs::read_to_string(path).map_err(|source| DemoError::Read {
        path: path.display().to_string(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| DemoError::Parse {
        path: path.display().to_string(),
        source,
    })
}

/// Feed `script` to the page one step at a time, then shut it down once
/// `settle` has passed.
async fn play(tx: UnboundedSender<PageInput>, script: Vec<PageInput>, settle: Duration) {
    for input in script {
        if tx.send(input).is_err() {
            return;
        }
        sleep(Duration::from_millis(150)).await;
    }
    sleep(settle).await;
    let _ = tx.send(PageInput::Shutdown);
}

/// Sign in with a too-short password, then a valid one.
fn login_script() -> Vec<PageInput> {
    vec![
        PageInput::ContentLoaded,
        PageInput::Focus("username".into()),
        PageInput::SetValue {
            id: "username".into(),
            value: "ada".into(),
        },
        PageInput::Blur,
        PageInput::Focus("password".into()),
        PageInput::SetValue {
            id: "password".into(),
            value: "abc".into(),
        },
        PageInput::Blur,
        PageInput::Submit("login-form".into()),
        PageInput::SetValue {
            id: "password".into(),
            value: "lovelace".into(),
        },
        PageInput::Submit("login-form".into()),
    ]
}

/// A short visit: fill the form badly, fix it, submit, browse, swipe.
fn dashboard_script() -> Vec<PageInput> {
    vec![
        PageInput::ContentLoaded,
        PageInput::Load,
        PageInput::Key(Key::Escape, Modifiers::NONE),
        PageInput::Focus("notify".into()),
        PageInput::SetValue {
            id: "notify".into(),
            value: "not-an-email".into(),
        },
        PageInput::Focus("title".into()),
        PageInput::Submit("upload-form".into()),
        PageInput::SetValue {
            id: "title".into(),
            value: "Quarterly report".into(),
        },
        PageInput::SetValue {
            id: "file".into(),
            value: "C:\\fakepath\\report.docx".into(),
        },
        PageInput::Blur,
        PageInput::Click("upload-btn".into()),
        PageInput::Submit("upload-form".into()),
        PageInput::Click("nav-documents".into()),
        PageInput::TouchStart(600.0),
        PageInput::TouchEnd(420.0),
    ]
}

async fn sign_in(config: &InteractionConfig) -> Result<(), DemoError> {
    let mut page = pages::login(tokio::time::Instant::now().into_std());
    install_on_content_loaded(&mut page, config.clone())?;

    let (tx, rx) = mpsc::unbounded_channel();
    let script = play(tx, login_script(), Duration::from_millis(300));
    let (page, ()) = tokio::join!(Runtime::new(page).run(rx), script);

    if let Some(group) = page.element("password-group") {
        log::info!("login password field: {:?}", FieldGroupState::of(group).validity);
    }
    Ok(())
}

async fn run() -> Result<(), DemoError> {
    let mut args = std::env::args().skip(1);
    let config: InteractionConfig = match args.next() {
        Some(path) => read_json(Path::new(&path))?,
        None => InteractionConfig::default(),
    };
    let now = Local::now();
    let docs = match args.next() {
        Some(path) => read_json::<DocumentList>(Path::new(&path))?.documents,
        None => documents::sample(now),
    };

    sign_in(&config).await?;

    let clock = tokio::time::Instant::now().into_std();
    let mut page = pages::dashboard(&docs, &config, &now, clock)?;
    let pending = install_on_content_loaded(&mut page, config)?;
    show_toast(&mut page, Toast::success(format!("{} document(s) ready", docs.len())));

    let (tx, rx) = mpsc::unbounded_channel();
    // Leave time for the toasts to play out.
    let script = play(tx, dashboard_script(), Duration::from_millis(3500));
    let (page, ()) = tokio::join!(Runtime::new(page).run(rx), script);

    if let Some(interactions) = pending.borrow().as_ref() {
        log::info!(
            "swipe: {:?}, load: {:?}",
            interactions.swipe().borrow().last_swipe(),
            interactions.load_report()
        );
    }
    println!("{}", page.to_html());
    Ok(())
}

#[tokio::main]
async fn main() {
    let log_file = File::create("pagekit-demo.log").expect("Failed to create log file");
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
