use anyhow::Result;
use dialoguer::{Input, Password, Select};
use soilview_core::models::{FileHandle, Variant, ViewState};

/// What the user picked from the action menu
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Login,
    Signup,
    Navigate(ViewState),
    ChoosePhotos,
    Logout,
    Quit,
}

impl Action {
    pub fn label(&self) -> String {
        match self {
            Action::Login => "Log in".to_string(),
            Action::Signup => "Sign up".to_string(),
            Action::Navigate(ViewState::Signup) => "Create an account".to_string(),
            Action::Navigate(ViewState::Login) => "Back to login".to_string(),
            Action::Navigate(view) => format!("Go to {}", view.title()),
            Action::ChoosePhotos => "Choose photos...".to_string(),
            Action::Logout => "Log out".to_string(),
            Action::Quit => "Quit".to_string(),
        }
    }
}

/// Actions offered on a view
pub fn actions_for(view: ViewState, authenticated: bool, variant: Variant) -> Vec<Action> {
    let mut actions = match view {
        ViewState::Login => vec![Action::Login, Action::Navigate(ViewState::Signup)],
        ViewState::Signup => vec![Action::Signup, Action::Navigate(ViewState::Login)],
        _ => Vec::new(),
    };

    if authenticated {
        actions.extend(
            variant
                .views()
                .iter()
                .filter(|v| !v.is_public() && **v != view)
                .map(|v| Action::Navigate(*v)),
        );
        // Previews are only shown on the photos view
        if variant.contains(ViewState::Photos) && matches!(view, ViewState::Home | ViewState::Photos)
        {
            actions.push(Action::ChoosePhotos);
        }
        actions.push(Action::Logout);
    } else if view == ViewState::Login {
        // Deep links are allowed; the navigator decides where they land.
        actions.extend(
            variant
                .views()
                .iter()
                .filter(|v| !v.is_public())
                .map(|v| Action::Navigate(*v)),
        );
    }

    actions.push(Action::Quit);
    actions
}

pub fn choose_action(actions: &[Action]) -> Result<Action> {
    let labels: Vec<String> = actions.iter().map(Action::label).collect();
    let selection = Select::new()
        .with_prompt("What next?")
        .items(&labels)
        .default(0)
        .interact()?;
    Ok(actions[selection].clone())
}

/// Login form. Empty answers are allowed so validation can reject them.
pub fn prompt_login() -> Result<(String, String)> {
    let email: String = Input::new().with_prompt("Email").allow_empty(true).interact_text()?;
    let password = Password::new().with_prompt("Password").allow_empty_password(true).interact()?;
    Ok((email, password))
}

pub fn prompt_signup() -> Result<(String, String, String)> {
    let username: String =
        Input::new().with_prompt("Username").allow_empty(true).interact_text()?;
    let email: String = Input::new().with_prompt("Email").allow_empty(true).interact_text()?;
    let password = Password::new().with_prompt("Password").allow_empty_password(true).interact()?;
    Ok((username, email, password))
}

pub fn prompt_photos() -> Result<Vec<FileHandle>> {
    let paths: String = Input::new()
        .with_prompt("Photo paths (comma separated)")
        .allow_empty(true)
        .interact_text()?;
    Ok(parse_photo_paths(&paths))
}

pub fn parse_photo_paths(input: &str) -> Vec<FileHandle> {
    input
        .split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(FileHandle::new)
        .collect()
}
