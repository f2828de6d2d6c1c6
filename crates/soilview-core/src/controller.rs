//! View controller: session, current view, sample, photo previews and chart.
//!
//! All actions run synchronously to completion on `&mut self`. The only
//! deferred event is an image finishing loading, delivered through
//! [`ViewController::image_loaded`].

pub mod auth;
pub mod chart;
pub mod navigator;
pub mod panel;
pub mod photos;

use crate::config::LayeredConfig;
use crate::error::{Result, ValidationError};
use crate::models::{CanvasId, FileHandle, PhotoId, Session, SoilSample, Variant, ViewState};
use crate::ports::{ChartBackend, DisplayUrlProvider};

pub use chart::ChartRenderer;
pub use navigator::{Navigation, Navigator, RedirectReason};
pub use panel::Panel;
pub use photos::{PhotoPreview, PhotoPreviewManager};

pub struct ViewController<P: DisplayUrlProvider, B: ChartBackend> {
    session: Session,
    navigator: Navigator,
    sample: SoilSample,
    canvas: CanvasId,
    photos: PhotoPreviewManager<P>,
    charts: ChartRenderer<B>,
}

impl<P: DisplayUrlProvider, B: ChartBackend> ViewController<P, B> {
    /// Build a controller around an injected session.
    ///
    /// Starts on `home` for an authenticated session, `login` otherwise.
    pub fn new(
        session: Session,
        variant: Variant,
        canvas: CanvasId,
        url_provider: P,
        chart_backend: B,
    ) -> Self {
        Self {
            session,
            navigator: Navigator::new(variant, &session),
            sample: SoilSample::for_variant(variant),
            canvas,
            photos: PhotoPreviewManager::new(url_provider),
            charts: ChartRenderer::new(chart_backend),
        }
    }

    pub fn from_config(
        session: Session,
        config: &LayeredConfig,
        url_provider: P,
        chart_backend: B,
    ) -> Self {
        Self::new(
            session,
            config.variant.value,
            CanvasId::new(config.canvas.value.clone()),
            url_provider,
            chart_backend,
        )
    }

    pub fn session(&self) -> Session {
        self.session
    }

    pub fn view(&self) -> ViewState {
        self.navigator.current()
    }

    pub fn variant(&self) -> Variant {
        self.navigator.variant()
    }

    pub fn sample(&self) -> &SoilSample {
        &self.sample
    }

    pub fn canvas(&self) -> &CanvasId {
        &self.canvas
    }

    pub fn photos(&self) -> &PhotoPreviewManager<P> {
        &self.photos
    }

    pub fn charts(&self) -> &ChartRenderer<B> {
        &self.charts
    }

    /// Log in with any non-empty email and password.
    ///
    /// On failure nothing changes.
    pub fn login(&mut self, email: &str, password: &str) -> std::result::Result<Session, ValidationError> {
        if let Err(e) = auth::validate_login(email, password) {
            tracing::info!(email = %email, missing = ?e.missing(), "Login rejected");
            return Err(e);
        }

        tracing::info!(email = %email, "Logging in");
        self.session.authenticated = true;
        self.navigator.navigate(&self.session, ViewState::Home);
        Ok(self.session)
    }

    /// Accept a signup form and send the user to login. No account is created.
    pub fn signup(
        &mut self,
        username: &str,
        email: &str,
        password: &str,
    ) -> std::result::Result<(), ValidationError> {
        if let Err(e) = auth::validate_signup(username, email, password) {
            tracing::info!(missing = ?e.missing(), "Signup rejected");
            return Err(e);
        }

        tracing::info!(username = %username, email = %email, "Signup accepted");
        self.navigator.navigate(&self.session, ViewState::Login);
        Ok(())
    }

    pub fn logout(&mut self) {
        tracing::info!("Logging out");
        self.session.authenticated = false;
        self.charts.dispose_all();
        self.navigator.navigate(&self.session, ViewState::Login);
    }

    /// Move to `target`, redirecting to login when the session or variant
    /// does not allow it.
    ///
    /// Entering the dashboard with a session redraws the chart once. The view
    /// change is committed before drawing, so a chart error leaves the
    /// dashboard current with an empty canvas.
    pub fn navigate(&mut self, target: ViewState) -> Result<Navigation> {
        let navigation = self.navigator.navigate(&self.session, target);
        self.activate(navigation)
    }

    /// Like [`navigate`](Self::navigate), for a raw route such as a deep link.
    /// Routes that name no view land on login.
    pub fn navigate_route(&mut self, route: &str) -> Result<Navigation> {
        let navigation = self.navigator.navigate_route(&self.session, route);
        self.activate(navigation)
    }

    fn activate(&mut self, navigation: Navigation) -> Result<Navigation> {
        if navigation.resolved == ViewState::Dashboard && self.session.is_authenticated() {
            self.charts.render_chart(&self.canvas, &self.sample.chart_series())?;
        }

        Ok(navigation)
    }

    /// Replace the photo selection
    pub fn select_photos<I>(&mut self, handles: I) -> Result<&[PhotoPreview]>
    where
        I: IntoIterator<Item = FileHandle>,
    {
        self.photos.select_photos(handles)
    }

    /// Image-load callback; releases that photo's display URL once
    pub fn image_loaded(&mut self, photo: PhotoId) -> bool {
        self.photos.release_on_load(photo)
    }

    pub fn render(&self) -> Panel<'_> {
        match self.view() {
            ViewState::Login => Panel::Login,
            ViewState::Signup => Panel::Signup,
            ViewState::Home => Panel::Home { sample: &self.sample },
            ViewState::Dashboard => Panel::Dashboard {
                canvas: &self.canvas,
                series: self.sample.chart_series(),
            },
            ViewState::Photos => Panel::Photos { previews: self.photos.selection() },
            ViewState::Analysis => Panel::Analysis { sample: &self.sample },
            ViewState::Reports => Panel::Reports { sample: &self.sample },
            ViewState::Profile => Panel::Profile,
            ViewState::Contact => Panel::Contact,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::{BlobUrlRegistry, RecordingChartBackend};

    fn controller(session: Session) -> ViewController<BlobUrlRegistry, RecordingChartBackend> {
        ViewController::new(
            session,
            Variant::Dashboard,
            CanvasId::default(),
            BlobUrlRegistry::new(),
            RecordingChartBackend::new(),
        )
    }

    #[test]
    fn test_injected_session_picks_initial_view() {
        assert_eq!(controller(Session::new()).view(), ViewState::Login);
        assert_eq!(controller(Session::authenticated()).view(), ViewState::Home);
    }

    #[test]
    fn test_failed_login_changes_nothing() {
        let mut vc = controller(Session::new());
        vc.navigate(ViewState::Signup).unwrap();

        assert!(vc.login("a@b.com", "").is_err());
        assert!(!vc.session().is_authenticated());
        assert_eq!(vc.view(), ViewState::Signup);
    }

    #[test]
    fn test_signup_returns_to_login_without_authenticating() {
        let mut vc = controller(Session::new());
        vc.navigate(ViewState::Signup).unwrap();

        vc.signup("grower", "a@b.com", "pw").unwrap();
        assert_eq!(vc.view(), ViewState::Login);
        assert!(!vc.session().is_authenticated());
    }

    #[test]
    fn test_chart_drawn_only_on_authenticated_dashboard() {
        let charts = RecordingChartBackend::new();
        let mut vc = ViewController::new(
            Session::new(),
            Variant::Dashboard,
            CanvasId::default(),
            BlobUrlRegistry::new(),
            charts.clone(),
        );

        vc.navigate(ViewState::Dashboard).unwrap();
        assert_eq!(charts.draw_count(), 0);

        vc.login("a@b.com", "x").unwrap();
        vc.navigate(ViewState::Reports).unwrap();
        assert_eq!(charts.draw_count(), 0);

        vc.navigate(ViewState::Dashboard).unwrap();
        vc.navigate(ViewState::Dashboard).unwrap();
        assert_eq!(charts.draw_count(), 2);
        assert_eq!(charts.live_on(vc.canvas()), 1);
    }

    #[test]
    fn test_unknown_deep_link_lands_on_login() {
        let charts = RecordingChartBackend::new();
        let mut vc = ViewController::new(
            Session::authenticated(),
            Variant::Dashboard,
            CanvasId::default(),
            BlobUrlRegistry::new(),
            charts.clone(),
        );

        let nav = vc.navigate_route("settings").unwrap();
        assert_eq!(nav.redirect, Some(RedirectReason::UnknownRoute));
        assert_eq!(vc.view(), ViewState::Login);
        assert!(vc.session().is_authenticated());

        vc.navigate_route("/dashboard").unwrap();
        assert_eq!(vc.view(), ViewState::Dashboard);
        assert_eq!(charts.draw_count(), 1);
    }

    #[test]
    fn test_logout_disposes_chart() {
        let charts = RecordingChartBackend::new();
        let mut vc = ViewController::new(
            Session::authenticated(),
            Variant::Dashboard,
            CanvasId::default(),
            BlobUrlRegistry::new(),
            charts.clone(),
        );

        vc.navigate(ViewState::Dashboard).unwrap();
        vc.logout();

        assert_eq!(charts.live_on(&CanvasId::default()), 0);
        assert_eq!(vc.view(), ViewState::Login);
    }

    #[test]
    fn test_render_matches_view() {
        let mut vc = controller(Session::authenticated());
        for view in Variant::Dashboard.views() {
            vc.navigate(*view).unwrap();
            assert_eq!(vc.render().view(), *view);
        }
    }

    #[test]
    fn test_photos_panel_lists_selection() {
        let mut vc = controller(Session::authenticated());
        vc.select_photos(vec![FileHandle::new("a.jpg"), FileHandle::new("b.jpg")]).unwrap();
        vc.navigate(ViewState::Photos).unwrap();

        match vc.render() {
            Panel::Photos { previews } => assert_eq!(previews.len(), 2),
            other => panic!("expected photos panel, got {:?}", other.view()),
        }
    }

    #[test]
    fn test_image_loaded_does_not_move_navigation() {
        let mut vc = controller(Session::authenticated());
        vc.navigate(ViewState::Photos).unwrap();
        let id = vc.select_photos(vec![FileHandle::new("a.jpg")]).unwrap()[0].id();

        assert!(vc.image_loaded(id));
        assert_eq!(vc.view(), ViewState::Photos);
    }
}
