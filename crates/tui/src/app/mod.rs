use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEvent};

use api_types::{
    RecordId,
    balance::BalanceSummary,
    expense::{Expense, ExpenseCategory, ExpenseNew},
    income::{Income, IncomeNew},
    reminder::{Reminder, ReminderNew},
};
use ledger::{LedgerStore, Movement, Reconciler, SyncedCollection};

use crate::{
    client::RestClient,
    config::{AppConfig, ThemeMode},
    error::{AppError, Result},
    forms, ui,
    ui::keymap::AppAction,
};

const TOAST_TTL: Duration = Duration::from_secs(4);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Dashboard,
    Ingresos,
    Gastos,
    Recordatorios,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Self::Dashboard,
        Self::Ingresos,
        Self::Gastos,
        Self::Recordatorios,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Ingresos => "Ingresos",
            Self::Gastos => "Gastos",
            Self::Recordatorios => "Recordatorios",
        }
    }

    fn index(self) -> usize {
        Self::ALL.iter().position(|s| *s == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Dashboard data is one fail-fast snapshot: either everything rendered or a
/// blocking error replaces the whole screen.
#[derive(Debug)]
pub struct DashboardData {
    pub balance: BalanceSummary,
    pub movements: Vec<Movement>,
    pub reminders: Vec<Reminder>,
}

#[derive(Debug, Default)]
pub struct DashboardState {
    pub loading: bool,
    pub error: Option<String>,
    pub data: Option<DashboardData>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IncomeField {
    #[default]
    Monto,
    Descripcion,
}

#[derive(Debug, Default)]
pub struct IncomesState {
    pub list: SyncedCollection<Income>,
    pub loaded: bool,
    pub monto: String,
    pub descripcion: String,
    pub focus: IncomeField,
    pub message: Option<String>,
}

impl IncomesState {
    fn advance_focus(&mut self) {
        self.focus = match self.focus {
            IncomeField::Monto => IncomeField::Descripcion,
            IncomeField::Descripcion => IncomeField::Monto,
        };
    }

    fn active_field_mut(&mut self) -> &mut String {
        match self.focus {
            IncomeField::Monto => &mut self.monto,
            IncomeField::Descripcion => &mut self.descripcion,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExpenseField {
    #[default]
    Monto,
    Categoria,
    Descripcion,
}

#[derive(Debug, Default)]
pub struct ExpensesState {
    pub list: SyncedCollection<Expense>,
    pub loaded: bool,
    pub monto: String,
    pub categoria_idx: usize,
    pub descripcion: String,
    pub focus: ExpenseField,
    pub message: Option<String>,
}

impl ExpensesState {
    pub fn categoria(&self) -> ExpenseCategory {
        ExpenseCategory::ALL[self.categoria_idx % ExpenseCategory::ALL.len()]
    }

    fn advance_focus(&mut self) {
        self.focus = match self.focus {
            ExpenseField::Monto => ExpenseField::Categoria,
            ExpenseField::Categoria => ExpenseField::Descripcion,
            ExpenseField::Descripcion => ExpenseField::Monto,
        };
    }

    fn next_categoria(&mut self) {
        self.categoria_idx = (self.categoria_idx + 1) % ExpenseCategory::ALL.len();
    }

    fn prev_categoria(&mut self) {
        let len = ExpenseCategory::ALL.len();
        self.categoria_idx = (self.categoria_idx + len - 1) % len;
    }

    fn active_field_mut(&mut self) -> Option<&mut String> {
        match self.focus {
            ExpenseField::Monto => Some(&mut self.monto),
            ExpenseField::Categoria => None,
            ExpenseField::Descripcion => Some(&mut self.descripcion),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReminderField {
    #[default]
    Titulo,
    Fecha,
    Monto,
    Lista,
}

#[derive(Debug, Default)]
pub struct RemindersState {
    pub list: SyncedCollection<Reminder>,
    pub loaded: bool,
    pub titulo: String,
    pub fecha: String,
    pub monto: String,
    pub focus: ReminderField,
    pub selected: usize,
    pub confirm_delete: Option<RecordId>,
    pub message: Option<String>,
}

impl RemindersState {
    /// Reminders ordered by due date, upcoming first. The selection index
    /// refers to this order.
    pub fn sorted(&self) -> Vec<&Reminder> {
        let mut items: Vec<&Reminder> = self.list.items().iter().collect();
        items.sort_by_key(|r| r.fecha);
        items
    }

    pub fn selected_id(&self) -> Option<RecordId> {
        self.sorted().get(self.selected).map(|r| r.id.clone())
    }

    fn select_next(&mut self) {
        let len = self.list.len();
        if len == 0 {
            return;
        }
        self.selected = (self.selected + 1).min(len - 1);
    }

    fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    fn clamp_selection(&mut self) {
        self.selected = self.selected.min(self.list.len().saturating_sub(1));
    }

    fn advance_focus(&mut self) {
        self.focus = match self.focus {
            ReminderField::Titulo => ReminderField::Fecha,
            ReminderField::Fecha => ReminderField::Monto,
            ReminderField::Monto => ReminderField::Lista,
            ReminderField::Lista => ReminderField::Titulo,
        };
    }

    fn active_field_mut(&mut self) -> Option<&mut String> {
        match self.focus {
            ReminderField::Titulo => Some(&mut self.titulo),
            ReminderField::Fecha => Some(&mut self.fecha),
            ReminderField::Monto => Some(&mut self.monto),
            ReminderField::Lista => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Error,
}

#[derive(Debug)]
pub struct ToastState {
    pub message: String,
    pub level: ToastLevel,
    created: Instant,
}

#[derive(Debug)]
pub struct AppState {
    pub section: Section,
    pub theme_mode: ThemeMode,
    pub base_url: String,
    pub dashboard: DashboardState,
    pub incomes: IncomesState,
    pub expenses: ExpensesState,
    pub reminders: RemindersState,
    pub toast: Option<ToastState>,
}

pub struct App {
    reconciler: Reconciler<RestClient>,
    pub state: AppState,
    should_quit: bool,
}

impl App {
    pub fn new(config: AppConfig) -> Result<Self> {
        let client = RestClient::new(&config.base_url)?;
        let state = AppState {
            section: Section::Dashboard,
            theme_mode: config.theme,
            base_url: config.base_url,
            dashboard: DashboardState::default(),
            incomes: IncomesState::default(),
            expenses: ExpensesState::default(),
            reminders: RemindersState::default(),
            toast: None,
        };

        Ok(Self {
            reconciler: Reconciler::new(client),
            state,
            should_quit: false,
        })
    }

    pub async fn run(&mut self) -> Result<()> {
        let mut terminal = ui::setup_terminal()?;
        self.reload_dashboard().await;
        let result = self.event_loop(&mut terminal).await;
        ui::restore_terminal(&mut terminal)?;
        result
    }

    async fn event_loop(&mut self, terminal: &mut ui::Terminal) -> Result<()> {
        let tick_rate = Duration::from_millis(200);

        while !self.should_quit {
            self.expire_toast();
            terminal
                .draw(|frame| ui::render(frame, &self.state))
                .map_err(|err| AppError::Terminal(err.to_string()))?;

            if event::poll(tick_rate)? {
                match event::read()? {
                    Event::Key(key) => self.handle_key(key).await?,
                    Event::Resize(_, _) => {}
                    _ => {}
                }
            }
        }

        Ok(())
    }

    async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        match ui::keymap::map_key(key) {
            AppAction::Quit => {
                self.should_quit = true;
            }
            AppAction::ToggleTheme => {
                self.state.theme_mode = self.state.theme_mode.toggled();
            }
            AppAction::Reload => {
                self.reload_current().await;
            }
            AppAction::PrevSection => {
                let section = self.state.section.prev();
                self.enter_section(section).await;
            }
            AppAction::NextSection => {
                let section = self.state.section.next();
                self.enter_section(section).await;
            }
            action => match self.state.section {
                Section::Dashboard => self.handle_dashboard_key(action).await,
                Section::Ingresos => self.handle_incomes_key(action).await,
                Section::Gastos => self.handle_expenses_key(action).await,
                Section::Recordatorios => self.handle_reminders_key(action).await,
            },
        }

        Ok(())
    }

    async fn handle_dashboard_key(&mut self, action: AppAction) {
        match action {
            AppAction::Input('q') => self.should_quit = true,
            AppAction::Input('r') => self.reload_dashboard().await,
            _ => {}
        }
    }

    async fn handle_incomes_key(&mut self, action: AppAction) {
        match action {
            AppAction::NextField => self.state.incomes.advance_focus(),
            AppAction::Submit => self.submit_income().await,
            AppAction::Backspace => {
                self.state.incomes.active_field_mut().pop();
            }
            AppAction::Cancel => self.state.incomes.message = None,
            AppAction::Input(ch) => self.state.incomes.active_field_mut().push(ch),
            _ => {}
        }
    }

    async fn handle_expenses_key(&mut self, action: AppAction) {
        match action {
            AppAction::NextField => self.state.expenses.advance_focus(),
            AppAction::Submit => self.submit_expense().await,
            AppAction::Up if self.state.expenses.focus == ExpenseField::Categoria => {
                self.state.expenses.prev_categoria();
            }
            AppAction::Down if self.state.expenses.focus == ExpenseField::Categoria => {
                self.state.expenses.next_categoria();
            }
            AppAction::Backspace => {
                if let Some(field) = self.state.expenses.active_field_mut() {
                    field.pop();
                }
            }
            AppAction::Cancel => self.state.expenses.message = None,
            AppAction::Input(ch) => {
                if let Some(field) = self.state.expenses.active_field_mut() {
                    field.push(ch);
                }
            }
            _ => {}
        }
    }

    async fn handle_reminders_key(&mut self, action: AppAction) {
        if self.state.reminders.focus == ReminderField::Lista {
            match action {
                AppAction::Up => self.state.reminders.select_prev(),
                AppAction::Down => self.state.reminders.select_next(),
                AppAction::Submit => self.toggle_selected_reminder().await,
                AppAction::Input('x') => {
                    self.state.reminders.confirm_delete = self.state.reminders.selected_id();
                }
                AppAction::Input('y') => self.delete_confirmed_reminder().await,
                AppAction::Input('n') | AppAction::Cancel => {
                    self.state.reminders.confirm_delete = None;
                }
                AppAction::NextField => self.state.reminders.advance_focus(),
                _ => {}
            }
            return;
        }

        match action {
            AppAction::NextField => self.state.reminders.advance_focus(),
            AppAction::Submit => self.submit_reminder().await,
            AppAction::Backspace => {
                if let Some(field) = self.state.reminders.active_field_mut() {
                    field.pop();
                }
            }
            AppAction::Cancel => self.state.reminders.message = None,
            AppAction::Input(ch) => {
                if let Some(field) = self.state.reminders.active_field_mut() {
                    field.push(ch);
                }
            }
            _ => {}
        }
    }

    /// Section switches always re-enter through here. The dashboard refetches
    /// every time: its copies may have diverged while another section
    /// mutated the underlying collections.
    async fn enter_section(&mut self, section: Section) {
        self.state.section = section;
        match section {
            Section::Dashboard => self.reload_dashboard().await,
            Section::Ingresos => {
                if !self.state.incomes.loaded {
                    self.reload_incomes().await;
                }
            }
            Section::Gastos => {
                if !self.state.expenses.loaded {
                    self.reload_expenses().await;
                }
            }
            Section::Recordatorios => {
                if !self.state.reminders.loaded {
                    self.reload_reminders().await;
                }
            }
        }
    }

    async fn reload_current(&mut self) {
        match self.state.section {
            Section::Dashboard => self.reload_dashboard().await,
            Section::Ingresos => self.reload_incomes().await,
            Section::Gastos => self.reload_expenses().await,
            Section::Recordatorios => self.reload_reminders().await,
        }
    }

    async fn reload_dashboard(&mut self) {
        self.state.dashboard.loading = true;
        self.state.dashboard.error = None;

        match ledger::load_snapshot(self.reconciler.store()).await {
            Ok(snapshot) => {
                let movements = ledger::aggregate(&snapshot.incomes, &snapshot.expenses);
                self.state.dashboard.data = Some(DashboardData {
                    balance: snapshot.balance,
                    movements,
                    reminders: snapshot.reminders,
                });
            }
            Err(err) => {
                tracing::error!(%err, "dashboard load failed");
                self.state.dashboard.data = None;
                self.state.dashboard.error = Some("No se pudieron cargar los datos.".to_string());
            }
        }

        self.state.dashboard.loading = false;
    }

    async fn reload_incomes(&mut self) {
        match self.reconciler.store().incomes().await {
            Ok(items) => {
                self.state.incomes.list.replace(items);
                self.state.incomes.loaded = true;
                self.state.incomes.message = None;
            }
            Err(err) => {
                tracing::warn!(%err, "incomes load failed");
                self.state.incomes.message =
                    Some("No se pudieron cargar los ingresos.".to_string());
            }
        }
    }

    async fn reload_expenses(&mut self) {
        match self.reconciler.store().expenses().await {
            Ok(items) => {
                self.state.expenses.list.replace(items);
                self.state.expenses.loaded = true;
                self.state.expenses.message = None;
            }
            Err(err) => {
                tracing::warn!(%err, "expenses load failed");
                self.state.expenses.message = Some("No se pudieron cargar los gastos.".to_string());
            }
        }
    }

    async fn reload_reminders(&mut self) {
        match self.reconciler.store().reminders().await {
            Ok(items) => {
                self.state.reminders.list.replace(items);
                self.state.reminders.loaded = true;
                self.state.reminders.message = None;
                self.state.reminders.clamp_selection();
            }
            Err(err) => {
                tracing::warn!(%err, "reminders load failed");
                self.state.reminders.message =
                    Some("No se pudieron cargar los recordatorios.".to_string());
            }
        }
    }

    async fn submit_income(&mut self) {
        if self.state.incomes.list.is_busy() {
            return;
        }

        let monto = match forms::parse_monto(&self.state.incomes.monto) {
            Ok(monto) => monto,
            Err(msg) => {
                self.state.incomes.message = Some(msg);
                return;
            }
        };
        let descripcion = self.state.incomes.descripcion.trim().to_string();
        if descripcion.is_empty() {
            self.state.incomes.message = Some("Ingresa una descripción.".to_string());
            return;
        }
        self.state.incomes.message = None;

        let new = IncomeNew {
            monto,
            description: descripcion,
        };
        match self
            .reconciler
            .create_income(&mut self.state.incomes.list, new)
            .await
        {
            Ok(()) => {
                self.state.incomes.monto.clear();
                self.state.incomes.descripcion.clear();
                self.state.incomes.focus = IncomeField::Monto;
                self.show_toast("Ingreso guardado.", ToastLevel::Success);
            }
            Err(err) => self.show_toast(&err.to_string(), ToastLevel::Error),
        }
    }

    async fn submit_expense(&mut self) {
        if self.state.expenses.list.is_busy() {
            return;
        }

        let monto = match forms::parse_monto(&self.state.expenses.monto) {
            Ok(monto) => monto,
            Err(msg) => {
                self.state.expenses.message = Some(msg);
                return;
            }
        };
        let descripcion = self.state.expenses.descripcion.trim().to_string();
        if descripcion.is_empty() {
            self.state.expenses.message = Some("Ingresa una descripción.".to_string());
            return;
        }
        self.state.expenses.message = None;

        let new = ExpenseNew {
            monto,
            categoria: self.state.expenses.categoria(),
            description: descripcion,
        };
        match self
            .reconciler
            .create_expense(&mut self.state.expenses.list, new)
            .await
        {
            Ok(()) => {
                self.state.expenses.monto.clear();
                self.state.expenses.descripcion.clear();
                self.state.expenses.categoria_idx = 0;
                self.state.expenses.focus = ExpenseField::Monto;
                self.show_toast("Gasto guardado.", ToastLevel::Success);
            }
            Err(err) => self.show_toast(&err.to_string(), ToastLevel::Error),
        }
    }

    async fn submit_reminder(&mut self) {
        if self.state.reminders.list.is_busy() {
            return;
        }

        let titulo = self.state.reminders.titulo.trim().to_string();
        if titulo.is_empty() {
            self.state.reminders.message = Some("Ingresa un título.".to_string());
            return;
        }
        let fecha = match forms::parse_fecha(&self.state.reminders.fecha) {
            Ok(fecha) => fecha,
            Err(msg) => {
                self.state.reminders.message = Some(msg);
                return;
            }
        };
        let monto = match forms::parse_monto_opcional(&self.state.reminders.monto) {
            Ok(monto) => monto,
            Err(msg) => {
                self.state.reminders.message = Some(msg);
                return;
            }
        };
        self.state.reminders.message = None;

        let new = ReminderNew::new(titulo, fecha, monto);
        match self
            .reconciler
            .create_reminder(&mut self.state.reminders.list, new)
            .await
        {
            Ok(()) => {
                self.state.reminders.titulo.clear();
                self.state.reminders.fecha.clear();
                self.state.reminders.monto.clear();
                self.state.reminders.focus = ReminderField::Titulo;
                self.show_toast("Recordatorio guardado.", ToastLevel::Success);
            }
            Err(err) => self.show_toast(&err.to_string(), ToastLevel::Error),
        }
    }

    async fn toggle_selected_reminder(&mut self) {
        let Some(id) = self.state.reminders.selected_id() else {
            return;
        };
        if let Err(err) = self
            .reconciler
            .toggle_reminder(&mut self.state.reminders.list, &id)
            .await
        {
            self.show_toast(&err.to_string(), ToastLevel::Error);
        }
    }

    async fn delete_confirmed_reminder(&mut self) {
        let Some(id) = self.state.reminders.confirm_delete.take() else {
            return;
        };
        match self
            .reconciler
            .delete_reminder(&mut self.state.reminders.list, &id)
            .await
        {
            Ok(()) => {
                self.state.reminders.clamp_selection();
                self.show_toast("Recordatorio eliminado.", ToastLevel::Success);
            }
            Err(err) => self.show_toast(&err.to_string(), ToastLevel::Error),
        }
    }

    fn show_toast(&mut self, message: &str, level: ToastLevel) {
        self.state.toast = Some(ToastState {
            message: message.to_string(),
            level,
            created: Instant::now(),
        });
    }

    fn expire_toast(&mut self) {
        if let Some(toast) = &self.state.toast {
            if toast.created.elapsed() >= TOAST_TTL {
                self.state.toast = None;
            }
        }
    }
}
