use iced::widget::image::Handle;
use iced::widget::row;
use iced::{window, Element, Size, Subscription, Task, Theme};
use rfd::FileDialog;
use std::path::PathBuf;

mod config;
mod controller;
mod error;
mod processing;
mod state;
mod storage;
mod ui;

use config::Settings;
use controller::{Command, Controller};
use storage::FolderStore;

/// Main application state
struct ThresholdStudio {
    /// Owns the session (library, selection, adjustments) and the working folder
    controller: Controller<FolderStore>,
    /// The last rendered frame, None when nothing is selected
    frame: Option<Handle>,
    /// Status message to display to the user
    status: String,
    sidebar_width: f32,
    /// Logical window size and its scale factor, for sizing the frame
    window_size: Size,
    scale_factor: f32,
}

/// Application messages (events)
#[derive(Debug, Clone)]
pub enum Message {
    /// User clicked the "Load Images" button
    LoadImages,
    /// User picked an image in the list
    ImageSelected(PathBuf),
    /// User clicked "Delete" for the selected image
    DeleteSelected,
    ThresholdChanged(u8),
    InvertToggled(bool),
    BrightnessToggled(bool),
    WatercolorToggled(bool),
    ResetAdjustments,
    /// The window was resized
    WindowResized(window::Id, Size),
    ScaleFactorChanged(f32),
}

impl ThresholdStudio {
    /// Create a new instance of the application
    fn new(store: FolderStore, settings: &Settings) -> (Self, Task<Message>) {
        let window_size = Size::new(settings.window_width, settings.window_height);
        let viewport = ui::viewer::viewport_for(window_size, settings.sidebar_width, 1.0);

        let controller = Controller::new(store, settings.adjustments, viewport);
        let status = format!("Ready. {} images in library.", controller.session().library.len());

        (
            ThresholdStudio {
                controller,
                frame: None,
                status,
                sidebar_width: settings.sidebar_width,
                window_size,
                scale_factor: 1.0,
            },
            window::get_oldest()
                .and_then(window::get_scale_factor)
                .map(Message::ScaleFactorChanged),
        )
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        let command = match message {
            Message::LoadImages => {
                // Show the native file picker dialog
                let picked = FileDialog::new()
                    .set_title("Open files")
                    .add_filter("Image files", &["jpg", "jpeg", "png"])
                    .add_filter("All files", &["*"])
                    .pick_files();

                match picked {
                    Some(paths) if !paths.is_empty() => Command::Load(paths),
                    _ => return Task::none(),
                }
            }
            Message::ImageSelected(path) => Command::Select(path),
            Message::DeleteSelected => match self.controller.session().selection.path() {
                Some(path) => Command::Remove(path.to_path_buf()),
                None => return Task::none(),
            },
            Message::ThresholdChanged(value) => Command::SetThreshold(value),
            Message::InvertToggled(on) => Command::SetInvert(on),
            Message::BrightnessToggled(on) => Command::SetBrightnessEffect(on),
            Message::WatercolorToggled(on) => Command::SetWatercolorEffect(on),
            Message::ResetAdjustments => Command::ResetAdjustments,
            Message::WindowResized(id, size) => {
                self.window_size = size;
                let command = self.resize_command();
                self.apply(command);
                // The window may have moved to a display with another scale
                return window::get_scale_factor(id).map(Message::ScaleFactorChanged);
            }
            Message::ScaleFactorChanged(scale_factor) => {
                if scale_factor == self.scale_factor {
                    return Task::none();
                }
                self.scale_factor = scale_factor;
                self.resize_command()
            }
        };

        self.apply(command);
        Task::none()
    }

    fn resize_command(&self) -> Command {
        Command::Resize(ui::viewer::viewport_for(
            self.window_size,
            self.sidebar_width,
            self.scale_factor,
        ))
    }

    /// Run a command through the controller and keep the frame and status in sync
    fn apply(&mut self, command: Command) {
        let changes_library = matches!(command, Command::Load(_) | Command::Remove(_));
        let selects = matches!(command, Command::Select(_));

        match self.controller.dispatch(command) {
            Ok(frame) => {
                self.frame = frame.map(ui::viewer::frame_handle);
                let session = self.controller.session();
                if changes_library {
                    self.status = format!("{} images in library.", session.library.len());
                } else if selects {
                    if let Some(entry) = session.selection.path().and_then(|p| session.library.get(p)) {
                        let (width, height) = entry.dimensions();
                        self.status = format!("{} ({}x{})", entry.filename, width, height);
                    }
                }
            }
            Err(e) => {
                log::warn!("⚠️  {}", e);
                self.status = format!("❌ {}", e);
                self.frame = self.controller.redraw().map(ui::viewer::frame_handle);
            }
        }
    }

    /// Redraw whenever the window changes size
    fn subscription(&self) -> Subscription<Message> {
        window::resize_events().map(|(id, size)| Message::WindowResized(id, size))
    }

    /// Build the user interface
    fn view(&self) -> Element<'_, Message> {
        row![
            ui::sidebar::view(self.controller.session(), &self.status, self.sidebar_width),
            ui::viewer::view(self.frame.as_ref()),
        ]
        .into()
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let settings = Settings::load();
    let store = FolderStore::new(&settings.working_dir)?;
    log::info!("📁 Working folder: {}", store.root().display());

    iced::application(
        "Image Brightness Tool for Artists",
        ThresholdStudio::update,
        ThresholdStudio::view,
    )
    .subscription(ThresholdStudio::subscription)
    .theme(ThresholdStudio::theme)
    .window_size(Size::new(settings.window_width, settings.window_height))
    .centered()
    .run_with(move || ThresholdStudio::new(store, &settings))?;

    Ok(())
}
