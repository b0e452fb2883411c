use crate::events::AppEvent;
use crate::gui::theme::{self, ThemeColors};
use crate::gui::wheel::{self, State};
use gtk::prelude::*;
use gtk4 as gtk;
use relm4::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;
use wheel_core::config;
use wheel_core::geometry::CHART_SIZE;
use wheel_core::{Point, Viewport};

pub struct AppModel {
    pub state: Rc<RefCell<State>>,
    pub drawing_area: gtk::DrawingArea,
}

#[derive(Debug)]
pub enum AppMsg {
    Click(Point),
    Reset,
    ConfigReload,
}

impl From<AppEvent> for AppMsg {
    fn from(event: AppEvent) -> Self {
        match event {
            AppEvent::ConfigReload => AppMsg::ConfigReload,
        }
    }
}

#[relm4::component(pub)]
impl SimpleComponent for AppModel {
    type Init = (State, async_channel::Receiver<AppEvent>);
    type Input = AppMsg;
    type Output = ();

    view! {
        #[root]
        #[name = "window"]
        gtk::ApplicationWindow {
            set_title: Some("Impact Wheel"),
            set_default_width: CHART_SIZE as i32,
            set_default_height: CHART_SIZE as i32,

            add_controller = gtk::EventControllerKey {
                connect_key_pressed[sender] => move |_, key, _, _| {
                    if key == gtk::gdk::Key::Delete {
                        sender.input(AppMsg::Reset);
                        return glib::Propagation::Stop;
                    }
                    glib::Propagation::Proceed
                }
            },

            #[name = "drawing_area"]
            gtk::DrawingArea {
                set_hexpand: true,
                set_vexpand: true,
                add_css_class: "wheel-drawing-area",

                add_controller = gtk::GestureClick {
                    set_button: 1,
                    connect_pressed[sender] => move |_, _, x, y| {
                        sender.input(AppMsg::Click(Point::new(x, y)));
                    }
                }
            }
        }
    }

    fn init(
        init: Self::Init,
        root: Self::Root,
        sender: ComponentSender<Self>,
    ) -> ComponentParts<Self> {
        let (state, rx) = init;

        theme::load_css();

        let model = AppModel {
            state: Rc::new(RefCell::new(state)),
            drawing_area: gtk::DrawingArea::default(),
        };

        let widgets = view_output!();

        let mut model = model;
        model.drawing_area = widgets.drawing_area.clone();

        let state_draw = model.state.clone();
        widgets
            .drawing_area
            .set_draw_func(move |drawing_area, cr, width, height| {
                let style_context = drawing_area.style_context();
                let colors = ThemeColors::from_context(&style_context);
                let viewport = Viewport::new(width as f64, height as f64);
                if let Err(e) = wheel::draw(cr, &state_draw.borrow().chart, viewport, &colors) {
                    log::error!("Drawing error: {}", e);
                }
            });

        let sender_clone = sender.clone();
        relm4::spawn(async move {
            while let Ok(event) = rx.recv().await {
                sender_clone.input(AppMsg::from(event));
            }
        });

        root.present();

        ComponentParts { model, widgets }
    }

    fn update(&mut self, msg: Self::Input, _sender: ComponentSender<Self>) {
        match msg {
            AppMsg::Click(point) => {
                let viewport = Viewport::new(
                    self.drawing_area.width() as f64,
                    self.drawing_area.height() as f64,
                );
                let action = self.state.borrow_mut().click(point, viewport);
                if let Some(hit) = action.hit {
                    log::debug!("Click at {:?} hit {:?}", point, hit);
                }
                if action.should_redraw {
                    self.drawing_area.queue_draw();
                }
            }
            AppMsg::Reset => {
                if self.state.borrow_mut().reset().should_redraw {
                    log::info!("Cleared all selections");
                    self.drawing_area.queue_draw();
                }
            }
            AppMsg::ConfigReload => match config::load_config() {
                Ok(new_config) => {
                    self.state
                        .borrow_mut()
                        .reload_categories(new_config.categories_or_default());
                    self.drawing_area.queue_draw();
                    log::info!("Configuration reloaded");
                }
                Err(e) => log::error!("Failed to reload config: {}", e),
            },
        }
    }
}
