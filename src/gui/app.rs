use iced::widget::{column, container, text, Row};
use iced::{event, keyboard, Element, Event, Length, Subscription, Task};

use crate::display::Stage;
use crate::frames::{Frames, RotationDemo};
use super::Message;
use super::panel::PanelView;

/// One window holding a panel per named display window
pub struct Viewer {
    stage: Stage<Frames>,
    panels: Vec<PanelView>,
}

impl Viewer {
    pub fn new(demo: &RotationDemo) -> Self {
        let mut viewer = Self {
            stage: Stage::new(demo.frames()),
            panels: Vec::new(),
        };
        viewer.stage.advance();
        viewer.refresh();
        viewer
    }

    fn refresh(&mut self) {
        self.panels = self.stage.panels().iter().map(PanelView::from_panel).collect();
    }

    pub fn title(&self) -> String {
        match self.stage.current() {
            Some(panel) => format!("pillrot - {}", panel.window),
            None => "pillrot".to_string(),
        }
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Advance => {
                if self.stage.advance() {
                    self.refresh();
                    Task::none()
                } else {
                    iced::exit()
                }
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let panels = Row::with_children(self.panels.iter().map(PanelView::view)).spacing(16);

        let content = column![
            panels,
            text("Press any key for the next frame"),
        ]
        .spacing(20)
        .padding(20);

        container(content)
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .into()
    }

    pub fn subscription(&self) -> Subscription<Message> {
        event::listen_with(|event, _status, _window| match event {
            Event::Keyboard(keyboard::Event::KeyPressed { .. }) => Some(Message::Advance),
            _ => None,
        })
    }
}

/// Open the viewer and block until every frame has been shown or the window
/// is closed
pub fn run(demo: RotationDemo) -> anyhow::Result<()> {
    iced::application(move || Viewer::new(&demo), Viewer::update, Viewer::view)
        .title(Viewer::title)
        .subscription(Viewer::subscription)
        .run()
        .map_err(|e| anyhow::anyhow!("Viewer failed: {}", e))
}
