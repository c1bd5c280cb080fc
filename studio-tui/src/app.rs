//! Screen state and key handling

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use shared::models::{TimeSlot, Weekday};
use studio_core::services::ScheduleCell;
use studio_core::utils::error::log_if_system;
use studio_core::{AppError, ScheduleGrid, Session, StudioState};
use tui_input::Input;
use tui_input::backend::crossterm::EventHandler;

/// Shown after a successful registration
pub const MEMBER_ADDED: &str = "New member added successfully.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Error,
}

/// Modal dialog; blocks every key except Enter / Esc
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub text: String,
}

impl Notice {
    pub fn info(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Info,
            title: title.into(),
            text: text.into(),
        }
    }

    pub fn error(err: &AppError) -> Self {
        Self {
            kind: NoticeKind::Error,
            title: "Error".into(),
            text: err.message.clone(),
        }
    }
}

pub struct ScheduleView {
    pub session: Session,
    pub grid: ScheduleGrid,
    /// Index into [`Weekday::ALL`]
    pub row: usize,
    /// Index into [`TimeSlot::ALL`]
    pub col: usize,
}

impl ScheduleView {
    pub fn selected_cell(&self) -> &ScheduleCell {
        self.grid.cell(Weekday::ALL[self.row], TimeSlot::ALL[self.col])
    }

    fn move_by(&mut self, d_row: isize, d_col: isize) {
        self.row = step(self.row, d_row, Weekday::ALL.len());
        self.col = step(self.col, d_col, TimeSlot::ALL.len());
    }
}

fn step(pos: usize, delta: isize, len: usize) -> usize {
    pos.saturating_add_signed(delta).min(len - 1)
}

pub enum Screen {
    Login,
    Schedule(ScheduleView),
}

pub struct App {
    state: StudioState,
    /// Name field on the login screen
    pub input: Input,
    pub screen: Screen,
    pub notice: Option<Notice>,
    should_quit: bool,
}

impl App {
    pub fn new(state: StudioState) -> Self {
        Self {
            state,
            input: Input::default(),
            screen: Screen::Login,
            notice: None,
            should_quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub async fn handle_key(&mut self, key: KeyEvent) {
        if self.notice.is_some() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.notice = None;
            }
            return;
        }

        if matches!(self.screen, Screen::Login) {
            self.handle_login_key(key).await;
        } else {
            self.handle_schedule_key(key).await;
        }
    }

    async fn handle_login_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Enter => self.login().await,
            KeyCode::F(2) => self.register().await,
            KeyCode::Char('n') if ctrl => self.register().await,
            _ => {
                self.input.handle_event(&Event::Key(key));
            }
        }
    }

    async fn handle_schedule_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('L') => self.logout(),
            KeyCode::Up | KeyCode::Char('k') => self.move_selection(-1, 0),
            KeyCode::Down | KeyCode::Char('j') => self.move_selection(1, 0),
            KeyCode::Left | KeyCode::Char('h') => self.move_selection(0, -1),
            KeyCode::Right | KeyCode::Char('l') => self.move_selection(0, 1),
            KeyCode::Enter | KeyCode::Char('r') => self.toggle_selected().await,
            KeyCode::Char('v') => self.view_members().await,
            _ => {}
        }
    }

    async fn login(&mut self) {
        let name = self.input.value().to_string();
        let identity = self.state.identity();
        let result = match identity.login(&name).await {
            Ok(session) => self.state.schedule().grid(&session).await.map(|grid| (session, grid)),
            Err(e) => Err(e),
        };

        match result {
            Ok((session, grid)) => {
                self.input.reset();
                self.screen = Screen::Schedule(ScheduleView {
                    session,
                    grid,
                    row: 0,
                    col: 0,
                });
            }
            Err(e) => self.show_error(e),
        }
    }

    async fn register(&mut self) {
        let name = self.input.value().to_string();
        match self.state.identity().register(&name).await {
            Ok(_) => self.notice = Some(Notice::info("Success", MEMBER_ADDED)),
            Err(e) => self.show_error(e),
        }
    }

    fn logout(&mut self) {
        if let Screen::Schedule(view) = std::mem::replace(&mut self.screen, Screen::Login) {
            self.state.identity().logout(view.session);
        }
    }

    fn move_selection(&mut self, d_row: isize, d_col: isize) {
        if let Screen::Schedule(view) = &mut self.screen {
            view.move_by(d_row, d_col);
        }
    }

    async fn toggle_selected(&mut self) {
        let Screen::Schedule(view) = &mut self.screen else {
            return;
        };
        let class_id = view.selected_cell().target_id();

        let outcome = self.state.reservations().toggle(&view.session, class_id).await;
        let refreshed = self.state.schedule().grid(&view.session).await;

        match refreshed {
            Ok(grid) => view.grid = grid,
            Err(e) => log_if_system(&e),
        }
        match outcome {
            Ok(state) => self.notice = Some(Notice::info("Reservation", state.toggle_notice())),
            Err(e) => self.show_error(e),
        }
    }

    async fn view_members(&mut self) {
        let Screen::Schedule(view) = &self.screen else {
            return;
        };
        let class_id = view.selected_cell().target_id();

        match self.state.reservations().members(class_id).await {
            Ok(roster) => {
                let title = format!("Members of {}", roster.class.name);
                self.notice = Some(Notice::info(title, roster.notice()));
            }
            Err(e) => self.show_error(e),
        }
    }

    fn show_error(&mut self, err: AppError) {
        log_if_system(&err);
        self.notice = Some(Notice::error(&err));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use studio_core::Config;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    async fn app() -> App {
        let state = StudioState::initialize(&Config::in_memory()).await.unwrap();
        App::new(state)
    }

    async fn type_name(app: &mut App, name: &str) {
        for c in name.chars() {
            app.handle_key(key(KeyCode::Char(c))).await;
        }
    }

    async fn dismiss(app: &mut App) {
        app.handle_key(key(KeyCode::Enter)).await;
        assert!(app.notice.is_none());
    }

    fn view(app: &App) -> &ScheduleView {
        match &app.screen {
            Screen::Schedule(view) => view,
            Screen::Login => panic!("expected schedule screen"),
        }
    }

    async fn logged_in(name: &str) -> App {
        let mut app = app().await;
        type_name(&mut app, name).await;
        app.handle_key(key(KeyCode::F(2))).await;
        dismiss(&mut app).await;
        app.handle_key(key(KeyCode::Enter)).await;
        assert!(matches!(app.screen, Screen::Schedule(_)));
        app
    }

    #[tokio::test]
    async fn test_register_shows_success_and_keeps_login_screen() {
        let mut app = app().await;
        type_name(&mut app, "Alice").await;
        app.handle_key(KeyEvent::new(KeyCode::Char('n'), KeyModifiers::CONTROL)).await;

        let notice = app.notice.clone().unwrap();
        assert_eq!(notice.kind, NoticeKind::Info);
        assert_eq!(notice.text, "New member added successfully.");
        assert!(matches!(app.screen, Screen::Login));
        assert_eq!(app.input.value(), "Alice");
    }

    #[tokio::test]
    async fn test_register_empty_and_duplicate() {
        let mut app = app().await;
        app.handle_key(key(KeyCode::F(2))).await;
        assert_eq!(app.notice.as_ref().unwrap().text, "Please enter a name for the new member.");
        dismiss(&mut app).await;

        type_name(&mut app, "Bob").await;
        app.handle_key(key(KeyCode::F(2))).await;
        dismiss(&mut app).await;
        app.handle_key(key(KeyCode::F(2))).await;
        let notice = app.notice.as_ref().unwrap();
        assert_eq!(notice.kind, NoticeKind::Error);
        assert_eq!(notice.text, "A member with the same name already exists.");
    }

    #[tokio::test]
    async fn test_login_unknown_member() {
        let mut app = app().await;
        type_name(&mut app, "Nobody").await;
        app.handle_key(key(KeyCode::Enter)).await;
        assert_eq!(app.notice.as_ref().unwrap().text, "Member not found.");
        assert!(matches!(app.screen, Screen::Login));
    }

    #[tokio::test]
    async fn test_notice_blocks_other_keys() {
        let mut app = app().await;
        app.handle_key(key(KeyCode::Enter)).await;
        assert!(app.notice.is_some());

        app.handle_key(key(KeyCode::Char('x'))).await;
        assert!(app.notice.is_some());
        assert_eq!(app.input.value(), "");

        app.handle_key(key(KeyCode::Esc)).await;
        assert!(app.notice.is_none());
        assert!(!app.should_quit());
    }

    #[tokio::test]
    async fn test_reserve_view_cancel_from_grid() {
        let mut app = logged_in("Alice").await;
        assert_eq!(view(&app).session.member_name(), "Alice");
        assert_eq!(view(&app).selected_cell().label(), "Basketball");
        assert!(app.input.value().is_empty());

        app.handle_key(key(KeyCode::Char('r'))).await;
        assert_eq!(app.notice.as_ref().unwrap().text, "Reservation successful.");
        dismiss(&mut app).await;
        assert_eq!(view(&app).selected_cell().action_label(), Some("Cancel"));

        app.handle_key(key(KeyCode::Char('v'))).await;
        let notice = app.notice.clone().unwrap();
        assert_eq!(notice.title, "Members of Basketball");
        assert_eq!(notice.text, "Alice");
        dismiss(&mut app).await;

        app.handle_key(key(KeyCode::Enter)).await;
        assert_eq!(app.notice.as_ref().unwrap().text, "Reservation canceled.");
        dismiss(&mut app).await;

        app.handle_key(key(KeyCode::Char('v'))).await;
        assert_eq!(
            app.notice.as_ref().unwrap().text,
            "No members have reserved this class yet."
        );
    }

    #[tokio::test]
    async fn test_navigation_targets_displayed_class() {
        let mut app = logged_in("Alice").await;
        // Sunday 10:00 is Swimming, class 5
        app.handle_key(key(KeyCode::Down)).await;
        app.handle_key(key(KeyCode::Char('l'))).await;
        assert_eq!(view(&app).selected_cell().label(), "Swimming");

        app.handle_key(key(KeyCode::Char('r'))).await;
        dismiss(&mut app).await;
        let roster = app.state.reservations().members(shared::models::ClassId(5)).await.unwrap();
        assert_eq!(roster.member_names, vec!["Alice"]);

        // Movement clamps at the grid edges
        for _ in 0..10 {
            app.handle_key(key(KeyCode::Up)).await;
            app.handle_key(key(KeyCode::Left)).await;
        }
        assert_eq!((view(&app).row, view(&app).col), (0, 0));
        for _ in 0..10 {
            app.handle_key(key(KeyCode::Char('j'))).await;
            app.handle_key(key(KeyCode::Right)).await;
        }
        assert_eq!(view(&app).selected_cell().label(), "Archery");
    }

    #[tokio::test]
    async fn test_empty_cell_actions_report_class_not_found() {
        let mut app = app().await;
        sqlx::query("DELETE FROM class WHERE id = 1")
            .execute(app.state.pool())
            .await
            .unwrap();

        type_name(&mut app, "Alice").await;
        app.handle_key(key(KeyCode::F(2))).await;
        dismiss(&mut app).await;
        app.handle_key(key(KeyCode::Enter)).await;
        assert_eq!(view(&app).selected_cell().label(), "No class");

        app.handle_key(key(KeyCode::Char('r'))).await;
        let notice = app.notice.clone().unwrap();
        assert_eq!(notice.kind, NoticeKind::Error);
        assert_eq!(notice.text, "Class not found.");
        dismiss(&mut app).await;

        app.handle_key(key(KeyCode::Char('v'))).await;
        let notice = app.notice.clone().unwrap();
        assert_eq!(notice.kind, NoticeKind::Error);
        assert_eq!(notice.text, "Class not found.");
    }

    #[tokio::test]
    async fn test_logout_and_quit() {
        let mut app = logged_in("Alice").await;
        app.handle_key(key(KeyCode::Char('L'))).await;
        assert!(matches!(app.screen, Screen::Login));
        assert!(!app.should_quit());

        app.handle_key(key(KeyCode::Esc)).await;
        assert!(app.should_quit());

        let mut app = logged_in("Bob").await;
        app.handle_key(key(KeyCode::Char('q'))).await;
        assert!(app.should_quit());
    }
}
