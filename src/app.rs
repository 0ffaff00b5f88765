//! The dashboard screen: wires [`Dashboard`] state to the widgets and the
//! bubbletea-rs runtime.
//!
//! Every key press that changes list state is turned into an [`Action`] and
//! applied to the dashboard; the table rows are then rebuilt from the new
//! state. Widgets only hold presentation state (row cursor, input text).

use crate::config::Config;
use crate::dashboard::{Action, Dashboard};
use crate::help;
use crate::keys::{DashboardKeyMap, InputKeyMap};
use crate::loader::{load_users, UsersLoadedMsg};
use crate::spinner;
use crate::table::{self, Column, Row};
use crate::textinput;
use bubbletea_rs::{batch, quit, Cmd, KeyMsg, Model as BubbleTeaModel, Msg, WindowSizeMsg};
use crossterm::event::{KeyCode, KeyModifiers};
use lipgloss_extras::prelude::*;

/// Which widget receives key input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// Row navigation and actions.
    Table,
    /// The search box.
    Search,
    /// The inline rename editor.
    Editing,
    /// The page number prompt.
    GoToPage,
}

/// The running application.
pub struct App {
    state: Dashboard,
    table: table::Model,
    search: textinput::Model,
    editor: textinput::Model,
    page_input: textinput::Model,
    spinner: spinner::Model,
    help: help::Model,
    keys: DashboardKeyMap,
    search_keys: InputKeyMap,
    edit_keys: InputKeyMap,
    page_keys: InputKeyMap,
    focus: Focus,
    loading: bool,
    title_style: Style,
    status_style: Style,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    /// Creates the screen in its loading state.
    pub fn new() -> Self {
        let table = table::Model::new(vec![
            Column::new("Name", 24),
            Column::new("Email", 32),
            Column::new("Role", 10),
        ]);
        let search = textinput::new()
            .with_prompt("Search: ")
            .with_placeholder("Search here");
        let editor = textinput::new().with_prompt("");
        let mut page_input = textinput::new().with_prompt("Page: ");
        page_input.char_limit = 6;

        let mut app = Self {
            state: Dashboard::new(),
            table,
            search,
            editor,
            page_input,
            spinner: spinner::Model::new(),
            help: help::Model::new(),
            keys: DashboardKeyMap::default(),
            search_keys: InputKeyMap::new("search"),
            edit_keys: InputKeyMap::new("save"),
            page_keys: InputKeyMap::new("go"),
            focus: Focus::Table,
            loading: true,
            title_style: Style::new()
                .bold(true)
                .foreground(Color::from("230"))
                .background(Color::from("62")),
            status_style: Style::new().foreground(AdaptiveColor {
                Light: "#A49FA5",
                Dark: "#777777",
            }),
        };
        app.refresh_rows();
        app
    }

    /// The list state.
    pub fn state(&self) -> &Dashboard {
        &self.state
    }

    /// The widget that currently has focus.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Whether the initial fetch is still in flight.
    pub fn loading(&self) -> bool {
        self.loading
    }

    /// The table widget.
    pub fn table(&self) -> &table::Model {
        &self.table
    }

    fn dispatch(&mut self, action: Action) {
        let page = self.state.page();
        self.state.apply(action);
        if self.state.page() != page {
            self.table.set_cursor(0);
        }
        self.refresh_rows();
    }

    fn refresh_rows(&mut self) {
        let editing = self.state.editing();
        let rows = self
            .state
            .page_rows()
            .iter()
            .map(|user| {
                let name = if editing == Some(user.id.as_str()) {
                    self.editor.view()
                } else {
                    user.name.clone()
                };
                Row::new(vec![name, user.email.clone(), user.role.clone()])
                    .with_checked(self.state.is_selected(&user.id))
            })
            .collect();
        self.table.set_rows(rows);
        self.table.set_header_checked(self.state.all_selected());
    }

    fn cursor_id(&self) -> Option<String> {
        self.state
            .page_rows()
            .get(self.table.cursor())
            .map(|u| u.id.clone())
    }

    fn on_loaded(&mut self, result: crate::Result<Vec<crate::User>>) {
        self.loading = false;
        match result {
            Ok(users) => self.dispatch(Action::Loaded(users)),
            Err(err) => tracing::error!(error = %err, "failed to load users"),
        }
    }

    fn update_table(&mut self, key_msg: &KeyMsg) -> Option<Cmd> {
        if self.keys.quit.matches(key_msg) {
            return Some(quit());
        }
        if self.keys.search.matches(key_msg) {
            self.focus = Focus::Search;
            self.search.focus();
            return None;
        }
        if self.keys.cursor_up.matches(key_msg) {
            self.table.move_up();
            return None;
        }
        if self.keys.cursor_down.matches(key_msg) {
            self.table.move_down();
            return None;
        }
        if self.keys.toggle_all.matches(key_msg) {
            self.dispatch(Action::ToggleAll);
            return None;
        }
        if self.keys.remove_selected.matches(key_msg) {
            self.dispatch(Action::RemoveSelected);
            return None;
        }
        if self.keys.go_to_page.matches(key_msg) {
            self.page_input.reset();
            self.page_input.focus();
            self.focus = Focus::GoToPage;
            return None;
        }
        if let Some(action) = self.keys.page_action(key_msg) {
            self.dispatch(action);
            return None;
        }

        let Some(id) = self.cursor_id() else {
            return None;
        };
        if self.keys.toggle_row.matches(key_msg) {
            self.dispatch(Action::ToggleRow(id));
        } else if self.keys.remove.matches(key_msg) {
            self.dispatch(Action::Remove(id));
        } else if self.keys.edit.matches(key_msg) {
            self.editor.set_value(&self.state.name_of(&id));
            self.editor.focus();
            self.focus = Focus::Editing;
            self.dispatch(Action::BeginEdit(id));
        }
        None
    }

    fn update_search(&mut self, msg: &Msg, key_msg: &KeyMsg) {
        if self.search_keys.submit.matches(key_msg) {
            self.search.blur();
            self.focus = Focus::Table;
            self.dispatch(Action::Search(self.search.value()));
        } else if self.search_keys.cancel.matches(key_msg) {
            self.search.blur();
            self.focus = Focus::Table;
        } else {
            self.search.update(msg);
        }
    }

    fn update_page_input(&mut self, msg: &Msg, key_msg: &KeyMsg) {
        if self.page_keys.submit.matches(key_msg) {
            self.page_input.blur();
            self.focus = Focus::Table;
            let value = self.page_input.value();
            match value.trim().parse::<usize>() {
                Ok(page) => self.dispatch(Action::GoToPage(page)),
                Err(_) => tracing::warn!(input = %value, "ignoring invalid page number"),
            }
        } else if self.page_keys.cancel.matches(key_msg) {
            self.page_input.blur();
            self.focus = Focus::Table;
        } else {
            // Only digits are typed; editing shortcuts still apply.
            let stray = matches!(key_msg.key, KeyCode::Char(c) if !c.is_ascii_digit())
                && !key_msg.modifiers.contains(KeyModifiers::CONTROL);
            if !stray {
                self.page_input.update(msg);
            }
        }
    }

    fn update_editor(&mut self, msg: &Msg, key_msg: &KeyMsg) {
        let Some(id) = self.state.editing().map(str::to_string) else {
            self.focus = Focus::Table;
            return;
        };
        if self.edit_keys.submit.matches(key_msg) {
            self.editor.blur();
            self.focus = Focus::Table;
            self.dispatch(Action::Rename {
                id,
                name: self.editor.value(),
            });
        } else if self.edit_keys.cancel.matches(key_msg) {
            self.editor.blur();
            self.focus = Focus::Table;
            self.dispatch(Action::CancelEdit);
        } else {
            self.editor.update(msg);
            self.refresh_rows();
        }
    }

    fn status_line(&self) -> String {
        let page_count = self.state.page_count();
        let page = if page_count == 0 {
            "no pages".to_string()
        } else {
            format!("page {}/{}", self.state.page(), page_count)
        };
        format!(
            "{} of {} users • {} selected • {}",
            self.state.filtered().len(),
            self.state.users().len(),
            self.state.selected().len(),
            page
        )
    }
}

impl BubbleTeaModel for App {
    fn init() -> (Self, Option<Cmd>) {
        let app = App::new();
        let cmd = batch(vec![app.spinner.tick(), load_users(Config::current())]);
        (app, Some(cmd))
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        let msg = match msg.downcast::<UsersLoadedMsg>() {
            Ok(loaded) => {
                self.on_loaded(loaded.0);
                return None;
            }
            Err(msg) => msg,
        };

        if let Some(size) = msg.downcast_ref::<WindowSizeMsg>() {
            let width = size.width as usize;
            self.table.fit_width(width);
            self.help.width = width;
            return None;
        }

        if msg.downcast_ref::<spinner::TickMsg>().is_some() {
            return if self.loading {
                self.spinner.update(&msg)
            } else {
                None
            };
        }

        let key_msg = msg.downcast_ref::<KeyMsg>()?;
        if self.keys.force_quit.matches(key_msg) {
            return Some(quit());
        }

        match self.focus {
            Focus::Table => self.update_table(key_msg),
            Focus::Search => {
                self.update_search(&msg, key_msg);
                None
            }
            Focus::Editing => {
                self.update_editor(&msg, key_msg);
                None
            }
            Focus::GoToPage => {
                self.update_page_input(&msg, key_msg);
                None
            }
        }
    }

    fn view(&self) -> String {
        let mut out = vec![
            self.title_style.render(" Users "),
            self.status_style.render(&self.status_line()),
            String::new(),
            self.search.view(),
            String::new(),
        ];
        if self.focus == Focus::GoToPage {
            out.push(self.page_input.view());
            out.push(String::new());
        }

        if self.loading {
            out.push(format!("{} Loading users…", self.spinner.view()));
        } else {
            out.push(self.table.view());
            out.push(String::new());
            out.push(self.state.pager().view(self.state.filtered().len()));
        }

        out.push(String::new());
        out.push(match self.focus {
            Focus::Table => self.help.view(&self.keys),
            Focus::Search => self.help.view(&self.search_keys),
            Focus::Editing => self.help.view(&self.edit_keys),
            Focus::GoToPage => self.help.view(&self.page_keys),
        });
        out.join("\n")
    }
}
