use iced::keyboard::{self, key};
use iced::widget::{center, column, container, keyed_column, scrollable, text, text_input};
use iced::{Element, Fill, Subscription, Task as Command, Theme};

use crate::entry::{Collection, EntryId, EntryMessage};
use crate::state::persistence::{StorageError, Store};
use crate::state::{Category, State};
use crate::ui::{controls::view_controls, styles::subtle};

#[derive(Debug)]
pub enum Todos {
    Loading,
    Loaded { store: Store, state: State },
}

#[derive(Debug, Clone)]
pub enum Message {
    Loaded(Store, Collection),
    Saved(Result<(), StorageError>),
    InputChanged(String),
    CreateEntry,
    CategorySelected(Category),
    Entry(EntryId, EntryMessage),
    TabPressed { shift: bool },
    EscapePressed,
}

fn input_id() -> text_input::Id {
    text_input::Id::new("new-entry")
}

impl Todos {
    pub fn new() -> (Self, Command<Message>) {
        (
            Self::Loading,
            Command::perform(
                async {
                    let store = Store::open_default().await;
                    let collection = store.load().await;
                    (store, collection)
                },
                |(store, collection)| Message::Loaded(store, collection),
            ),
        )
    }

    pub fn title(&self) -> String {
        let pending = match self {
            Todos::Loading => false,
            Todos::Loaded { state, .. } => state.dirty || state.saving,
        };

        format!("To Do{}", if pending { "..." } else { "" })
    }

    pub fn theme(&self) -> Theme {
        Theme::Dark
    }

    pub fn update(&mut self, message: Message) -> Command<Message> {
        match self {
            Todos::Loading => {
                if let Message::Loaded(store, collection) = message {
                    *self = Todos::Loaded {
                        store,
                        state: State::new(collection),
                    };
                }

                text_input::focus(input_id())
            }
            Todos::Loaded { store, state } => {
                let command = match message {
                    Message::InputChanged(value) => {
                        state.input_value = value;
                        Command::none()
                    }
                    Message::CreateEntry => {
                        if let Some(id) = state.submit_input() {
                            tracing::debug!(%id, category = ?state.category, "added entry");
                        }
                        Command::none()
                    }
                    Message::CategorySelected(category) => {
                        state.select_category(category);
                        Command::none()
                    }
                    Message::Entry(id, EntryMessage::Delete) => {
                        state.request_delete(id);
                        Command::none()
                    }
                    Message::Entry(id, EntryMessage::ConfirmDelete(token)) => {
                        if state.confirm_delete(token).is_some() {
                            tracing::debug!(%id, "removed entry");
                        }
                        Command::none()
                    }
                    Message::Entry(_, EntryMessage::CancelDelete) | Message::EscapePressed => {
                        state.cancel_delete();
                        Command::none()
                    }
                    Message::Saved(result) => {
                        state.finish_save();

                        if let Err(error) = result {
                            tracing::error!(%error, "failed to save collection, keeping in-memory state");
                        }
                        Command::none()
                    }
                    Message::TabPressed { shift } => {
                        if shift {
                            iced::widget::focus_previous()
                        } else {
                            iced::widget::focus_next()
                        }
                    }
                    Message::Loaded(..) => Command::none(),
                };

                // The view already shows the change; persisting happens behind it.
                let save = match state.begin_save() {
                    Some(snapshot) => {
                        let store = store.clone();
                        Command::perform(async move { store.save(&snapshot).await }, Message::Saved)
                    }
                    None => Command::none(),
                };

                Command::batch(vec![command, save])
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        match self {
            Todos::Loading => self.loading_view(),
            Todos::Loaded { state, .. } => self.loaded_view(state),
        }
    }

    pub fn subscription(&self) -> Subscription<Message> {
        keyboard::on_key_press(|key, modifiers| {
            let keyboard::Key::Named(key) = key else {
                return None;
            };

            match key {
                key::Named::Tab => Some(Message::TabPressed {
                    shift: modifiers.shift(),
                }),
                key::Named::Escape => Some(Message::EscapePressed),
                _ => None,
            }
        })
    }

    fn loading_view(&self) -> Element<'_, Message> {
        let content = column![
            view_controls(Category::default()),
            center(text("Loading...").size(25).style(subtle)),
        ]
        .spacing(20)
        .height(Fill);

        Self::frame(content.into())
    }

    fn loaded_view<'a>(&'a self, state: &'a State) -> Element<'a, Message> {
        let content = column![
            view_controls(state.category),
            Self::create_input(state),
            Self::create_entries_view(state),
        ]
        .spacing(20)
        .height(Fill);

        Self::frame(content.into())
    }

    fn frame(content: Element<'_, Message>) -> Element<'_, Message> {
        container(content)
            .padding(iced::Padding {
                top: 60.0,
                left: 20.0,
                bottom: 20.0,
                right: 20.0,
            })
            .width(Fill)
            .height(Fill)
            .into()
    }

    fn create_input(state: &State) -> Element<'_, Message> {
        text_input(state.category.placeholder(), &state.input_value)
            .id(input_id())
            .on_input(Message::InputChanged)
            .on_submit(Message::CreateEntry)
            .padding([15, 20])
            .size(18)
            .style(|theme: &Theme, status| {
                let default_style = text_input::default(theme, status);

                text_input::Style {
                    border: iced::Border {
                        radius: 30.0.into(),
                        ..default_style.border
                    },
                    ..default_style
                }
            })
            .width(Fill)
            .into()
    }

    fn create_entries_view(state: &State) -> Element<'_, Message> {
        if state.visible_entries().next().is_none() {
            let message = if state.collection.is_empty() {
                "Nothing here yet".to_owned()
            } else {
                format!("No {} to-dos", state.category.label())
            };

            return center(text(message).size(25).style(subtle))
                .height(Fill)
                .into();
        }

        let entries = keyed_column(state.visible_entries().map(|(id, entry)| {
            (
                id,
                entry
                    .view(state.pending_token(id))
                    .map(move |message| Message::Entry(id, message)),
            )
        }))
        .spacing(10);

        scrollable(entries).height(Fill).into()
    }
}
