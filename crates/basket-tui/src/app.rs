use crate::dialog::{handle_dialog_input, DialogAction};
use crate::events::{Event, EventHandler};
use crate::ui;
use basket_core::{BasketError, BasketResult, InputState, SelectionState};
use basket_domain::commands::{
    AddItem, ClearItems, Command, CommandContext, RemoveItem, RenameItem, ToggleItem,
};
use basket_domain::{Item, ItemFilter, ItemId, ListOperations};
use basket_persistence::{JsonFileStore, PersistenceStore};
use crossterm::{
    event::KeyCode,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::Path;

#[derive(Debug, Clone, PartialEq)]
pub enum AppMode {
    Normal,
    AddItem,
    EditItem,
}

/// TUI state: the item list, the active view filter, and whatever dialog
/// is open. Every committed mutation saves the full sequence through the
/// store before the next event is handled.
pub struct App<S: PersistenceStore = JsonFileStore> {
    pub should_quit: bool,
    pub mode: AppMode,
    pub input: InputState,
    pub items: Vec<Item>,
    pub filter: ItemFilter,
    pub selection: SelectionState,
    /// One-line notice shown in the footer or the open dialog.
    pub status: Option<String>,
    editing_id: Option<ItemId>,
    store: S,
}

impl App<JsonFileStore> {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self::with_store(JsonFileStore::new(path))
    }
}

impl<S: PersistenceStore> App<S> {
    pub fn with_store(store: S) -> Self {
        Self {
            should_quit: false,
            mode: AppMode::Normal,
            input: InputState::new(),
            items: Vec::new(),
            filter: ItemFilter::All,
            selection: SelectionState::new(),
            status: None,
            editing_id: None,
            store,
        }
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Load the stored sequence. Missing or unparsable data means an
    /// empty list; no error is surfaced to the user.
    pub async fn load(&mut self) {
        if !self.store.exists().await {
            return;
        }
        match self.store.load().await {
            Ok(loaded) => {
                self.items = loaded.items;
                if !self.items.is_empty() {
                    self.selection.set(Some(0));
                }
            }
            Err(e) => {
                tracing::warn!("could not load stored list, starting empty: {e}");
            }
        }
    }

    async fn save(&self) -> BasketResult<()> {
        self.store.save(&self.items).await?;
        Ok(())
    }

    fn execute(&mut self, command: &dyn Command) -> BasketResult<()> {
        tracing::debug!("{}", command.description());
        let mut ctx = CommandContext {
            items: &mut self.items,
        };
        command.execute(&mut ctx)
    }

    /// Items under the active filter, in display order.
    pub fn visible_items(&self) -> Vec<&Item> {
        self.items.iter().filter(|i| self.filter.matches(i)).collect()
    }

    fn selected_id(&self) -> Option<ItemId> {
        let idx = self.selection.get()?;
        self.visible_items().get(idx).map(|item| item.id)
    }

    fn apply_filter(&mut self, filter: ItemFilter) {
        self.filter = filter;
        let visible = self.visible_items().len();
        self.selection.clamp(visible);
        if self.selection.get().is_none() && visible > 0 {
            self.selection.set(Some(0));
        }
    }

    /// Reapply the active filter after a mutation changed what is visible.
    fn refresh_view(&mut self) {
        self.apply_filter(self.filter);
    }

    pub async fn handle_key(&mut self, code: KeyCode) -> BasketResult<()> {
        match self.mode {
            AppMode::Normal => self.handle_normal_key(code).await?,
            AppMode::AddItem => {
                match handle_dialog_input(&mut self.input, code) {
                    DialogAction::Confirm => self.submit_add().await?,
                    DialogAction::Cancel => self.close_dialog(),
                    DialogAction::None => {}
                }
            }
            AppMode::EditItem => {
                match handle_dialog_input(&mut self.input, code) {
                    DialogAction::Confirm => self.submit_edit().await?,
                    DialogAction::Cancel => self.close_dialog(),
                    DialogAction::None => {}
                }
            }
        }
        Ok(())
    }

    async fn handle_normal_key(&mut self, code: KeyCode) -> BasketResult<()> {
        // Notices are transient: any keypress dismisses the last one.
        self.status = None;
        match code {
            KeyCode::Char('q') | KeyCode::Char('Q') => self.quit(),
            KeyCode::Char('a') | KeyCode::Char('n') => {
                self.mode = AppMode::AddItem;
                self.input.clear();
            }
            KeyCode::Char('e') => self.begin_edit(),
            KeyCode::Char('d') | KeyCode::Char('x') => self.remove_selected().await?,
            KeyCode::Enter | KeyCode::Char(' ') => self.toggle_selected().await?,
            KeyCode::Char('C') => self.clear_all().await?,
            KeyCode::Char('1') => self.apply_filter(ItemFilter::All),
            KeyCode::Char('2') => self.apply_filter(ItemFilter::Completed),
            KeyCode::Char('3') => self.apply_filter(ItemFilter::Incomplete),
            KeyCode::Char('j') | KeyCode::Down => {
                let visible = self.visible_items().len();
                self.selection.next(visible);
            }
            KeyCode::Char('k') | KeyCode::Up => self.selection.prev(),
            _ => {}
        }
        Ok(())
    }

    fn begin_edit(&mut self) {
        let Some(id) = self.selected_id() else {
            return;
        };
        let Some(item) = self.items.iter().find(|i| i.id == id) else {
            return;
        };
        if item.completed {
            self.status = Some("Completed items cannot be edited".to_string());
            return;
        }
        self.input.set(item.name.clone());
        self.editing_id = Some(id);
        self.mode = AppMode::EditItem;
    }

    async fn submit_add(&mut self) -> BasketResult<()> {
        let name = self.input.as_str().to_string();
        match self.add_item(&name) {
            Ok(item) => {
                tracing::info!("added item '{}' ({})", item.name, item.id);
                self.save().await?;
                self.close_dialog();
                self.refresh_view();
            }
            // Keep the dialog open with the input intact for correction.
            Err(BasketError::Validation(msg)) => self.status = Some(msg),
            Err(e) => return Err(e),
        }
        Ok(())
    }

    async fn submit_edit(&mut self) -> BasketResult<()> {
        let Some(id) = self.editing_id else {
            self.close_dialog();
            return Ok(());
        };
        let name = self.input.as_str().to_string();
        match self.rename_item(id, &name) {
            Ok(_) => {
                self.save().await?;
                self.close_dialog();
            }
            Err(BasketError::Validation(msg)) => self.status = Some(msg),
            Err(e) => return Err(e),
        }
        Ok(())
    }

    async fn toggle_selected(&mut self) -> BasketResult<()> {
        let Some(id) = self.selected_id() else {
            return Ok(());
        };
        self.toggle_item(id)?;
        self.save().await?;
        // Under completed/incomplete the item just swapped out of view.
        self.refresh_view();
        Ok(())
    }

    async fn remove_selected(&mut self) -> BasketResult<()> {
        let Some(id) = self.selected_id() else {
            return Ok(());
        };
        self.remove_item(id)?;
        self.save().await?;
        self.refresh_view();
        Ok(())
    }

    /// Destructive clear, no confirmation. Matches the observed behavior
    /// of the original widget.
    async fn clear_all(&mut self) -> BasketResult<()> {
        let dropped = self.clear_items()?;
        self.save().await?;
        self.selection.clear();
        self.status = Some(format!("Cleared {dropped} items"));
        Ok(())
    }

    fn close_dialog(&mut self) {
        self.mode = AppMode::Normal;
        self.input.clear();
        self.editing_id = None;
        self.status = None;
    }

    pub async fn run(&mut self) -> BasketResult<()> {
        self.load().await;

        let mut terminal = setup_terminal()?;
        let mut events = EventHandler::new();

        while !self.should_quit {
            terminal.draw(|frame| ui::render(self, frame))?;

            match events.next().await {
                Some(Event::Key(key)) => {
                    if let Err(e) = self.handle_key(key.code).await {
                        tracing::error!("operation failed: {e}");
                        self.status = Some(format!("Error: {e}"));
                    }
                }
                Some(Event::Tick) => {}
                None => break,
            }
        }

        events.stop();
        restore_terminal(&mut terminal)?;
        Ok(())
    }
}

impl<S: PersistenceStore> ListOperations for App<S> {
    fn add_item(&mut self, name: &str) -> BasketResult<Item> {
        self.execute(&AddItem {
            name: name.to_string(),
        })?;
        self.items
            .last()
            .cloned()
            .ok_or_else(|| BasketError::Internal("item added but list is empty".into()))
    }

    fn list_items(&self, filter: ItemFilter) -> BasketResult<Vec<Item>> {
        Ok(self
            .items
            .iter()
            .filter(|i| filter.matches(i))
            .cloned()
            .collect())
    }

    fn get_item(&self, id: ItemId) -> BasketResult<Option<Item>> {
        Ok(self.items.iter().find(|i| i.id == id).cloned())
    }

    fn rename_item(&mut self, id: ItemId, name: &str) -> BasketResult<Item> {
        self.execute(&RenameItem {
            item_id: id,
            name: name.to_string(),
        })?;
        self.get_item(id)?
            .ok_or_else(|| BasketError::NotFound(format!("Item {id}")))
    }

    fn toggle_item(&mut self, id: ItemId) -> BasketResult<Item> {
        self.execute(&ToggleItem { item_id: id })?;
        self.get_item(id)?
            .ok_or_else(|| BasketError::NotFound(format!("Item {id}")))
    }

    fn remove_item(&mut self, id: ItemId) -> BasketResult<()> {
        self.execute(&RemoveItem { item_id: id })
    }

    fn clear_items(&mut self) -> BasketResult<usize> {
        let count = self.items.len();
        self.execute(&ClearItems)?;
        Ok(count)
    }
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>, io::Error> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    Terminal::new(CrosstermBackend::new(stdout))
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<(), io::Error> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}
