use crate::core::card::{Catalog, Category, subset_label};
use crate::core::navigation::Screen;
use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{FlashcardView, Menu, MenuItem, TitleBar, WordList};

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::Paragraph;

fn split(area: Rect) -> [Rect; 3] {
    use Constraint::{Length, Min};
    Layout::vertical([Length(1), Min(0), Length(1)]).areas(area)
}

/// The region between the title bar and the help line.
pub fn main_area(frame_area: Rect) -> Rect {
    let [_, main, _] = split(frame_area);
    main
}

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    let [title_area, main_area, help_area] = split(frame.area());
    let state = app.nav.current_state();

    TitleBar::new(
        state.active_screen.label().to_string(),
        location(app),
        match state.active_screen {
            Screen::Flashcard | Screen::ListView => app.nav.progress(),
            _ => None,
        },
        app.status_message.clone(),
    )
    .render(frame, title_area);

    match state.active_screen {
        Screen::Home => {
            let items = home_items(app.nav.catalog());
            Menu::new(&mut tui.home_menu, "Choose a deck", &items).render(frame, main_area);
        }
        Screen::CategoryMenu => {
            let category = state
                .active_category
                .as_deref()
                .and_then(|name| app.nav.catalog().category(name));
            let items = category.map(set_items).unwrap_or_default();
            let title = state.active_category.as_deref().unwrap_or("Sets");
            Menu::new(&mut tui.category_menu, title, &items).render(frame, main_area);
        }
        Screen::Flashcard => match app.nav.current_card() {
            Ok(card) => FlashcardView::new(card, state.revealed).render(frame, main_area),
            Err(e) => draw_error_view(frame, main_area, &e.to_string()),
        },
        Screen::ListView => {
            WordList::new(&mut tui.word_list, &state.active_deck, state.active_index)
                .render(frame, main_area);
        }
    }

    let help = Paragraph::new(help_text(state.active_screen))
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, help_area);

    if let Some(toast) = tui.toast.as_mut() {
        toast.render(frame, main_area);
    }
}

fn draw_error_view(frame: &mut Frame, area: Rect, error_msg: &str) {
    let error_paragraph = Paragraph::new(error_msg)
        .style(Style::default().fg(Color::Red))
        .alignment(Alignment::Center);
    frame.render_widget(error_paragraph, area);
}

/// "verbs · Set 2" inside a deck, "verbs" in its menu, empty at home.
fn location(app: &App) -> String {
    let state = app.nav.current_state();
    match (state.active_screen, state.active_category.as_deref()) {
        (Screen::Home, _) | (_, None) => String::new(),
        (Screen::CategoryMenu, Some(category)) => category.to_string(),
        (_, Some(category)) => match state.active_subset {
            Some(subset) => format!("{} · {}", category, subset_label(subset)),
            None => category.to_string(),
        },
    }
}

pub fn home_items(catalog: &Catalog) -> Vec<MenuItem> {
    catalog
        .categories()
        .iter()
        .map(|category| {
            let cards = category.card_count();
            let detail = match category.subsets.len() {
                1 => format!("{cards} cards"),
                sets => format!("{sets} sets · {cards} cards"),
            };
            MenuItem {
                label: category.name.clone(),
                detail,
            }
        })
        .collect()
}

pub fn set_items(category: &Category) -> Vec<MenuItem> {
    category
        .subsets
        .iter()
        .map(|deck| MenuItem {
            label: deck.label.clone(),
            detail: format!("{} cards", deck.len()),
        })
        .collect()
}

pub fn help_text(screen: Screen) -> &'static str {
    match screen {
        Screen::Home => "↑↓ select  Enter open  1-9 pick  q quit",
        Screen::CategoryMenu => "↑↓ select  Enter open  Esc back  g home  q quit",
        Screen::Flashcard => "←→ prev/next  Space flip  s shuffle  t list  Esc back  g home  q quit",
        Screen::ListView => "↑↓ select  Enter/click open card  Esc cards  g home  q quit",
    }
}
