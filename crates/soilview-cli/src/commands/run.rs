//! Interactive session

use anyhow::{ensure, Result};
use soilview_core::config::LayeredConfig;
use soilview_core::memory::BlobUrlRegistry;
use soilview_core::models::{PhotoId, Session, ViewState};
use soilview_core::{Navigation, ViewController};

use crate::cli::RunArgs;
use crate::interactive::{self, Action};
use crate::output::OutputWriter;
use crate::render;
use crate::terminal_chart::TerminalChartBackend;

type TerminalController = ViewController<BlobUrlRegistry, TerminalChartBackend>;

pub fn execute(args: RunArgs, config: &LayeredConfig, output: &OutputWriter) -> Result<()> {
    ensure!(!output.is_json(), "The interactive session has no JSON output; drop --json");

    let session = if args.logged_in {
        Session::authenticated()
    } else {
        Session::new()
    };

    let mut vc = ViewController::from_config(
        session,
        config,
        BlobUrlRegistry::new(),
        TerminalChartBackend,
    );
    tracing::info!(variant = %vc.variant(), view = %vc.view(), "Session started");

    if let Some(open) = args.open {
        let navigation = vc.navigate_route(&open)?;
        report_redirect(&navigation, output);
    }

    loop {
        render::panel(&vc.render(), output);
        if vc.view() == ViewState::Dashboard {
            if let Some(chart) = vc.charts().chart(vc.canvas()) {
                render::chart(chart);
            }
        }

        // Previews count as loaded once printed
        if vc.view() == ViewState::Photos {
            let loaded: Vec<PhotoId> = vc.photos().selection().iter().map(|p| p.id()).collect();
            for id in loaded {
                vc.image_loaded(id);
            }
        }

        let actions =
            interactive::actions_for(vc.view(), vc.session().is_authenticated(), vc.variant());
        let action = interactive::choose_action(&actions)?;

        if action == Action::Quit {
            break;
        }
        apply(&mut vc, action, output)?;
    }

    Ok(())
}

fn apply(vc: &mut TerminalController, action: Action, output: &OutputWriter) -> Result<()> {
    match action {
        Action::Login => {
            let (email, password) = interactive::prompt_login()?;
            match vc.login(&email, &password) {
                Ok(_) => output.success(format!("Logged in as {}", email)),
                Err(e) => output.error(e),
            }
        }
        Action::Signup => {
            let (username, email, password) = interactive::prompt_signup()?;
            match vc.signup(&username, &email, &password) {
                Ok(()) => output.success("Signup successful! Please log in."),
                Err(e) => output.error(e),
            }
        }
        Action::Navigate(target) => {
            let navigation = vc.navigate(target)?;
            report_redirect(&navigation, output);
        }
        Action::ChoosePhotos => {
            let handles = interactive::prompt_photos()?;
            let count = vc.select_photos(handles)?.len();
            output.success(format!("{} photo(s) selected", count));
            if vc.view() != ViewState::Photos {
                let navigation = vc.navigate(ViewState::Photos)?;
                report_redirect(&navigation, output);
            }
        }
        Action::Logout => {
            vc.logout();
            output.info("Logged out");
        }
        Action::Quit => {}
    }

    Ok(())
}

fn report_redirect(navigation: &Navigation, output: &OutputWriter) {
    if navigation.redirected() {
        output.warning(format!(
            "'{}' is not available here; showing {}",
            navigation.requested, navigation.resolved
        ));
    }
}
