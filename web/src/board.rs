use crate::sprite::{CELL_SIZE, SpriteSheet};
use flowers_core as game;
use game::{PointerButton, PointerButtons, PointerKind, PointerSample, SurfaceRect};
use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub(crate) struct BoardProps {
    pub seed: u64,
}

pub(crate) enum Msg {
    Pointer(PointerSample),
    SpriteLoaded,
    NewGame,
}

/// Canvas view of a single game.
///
/// All game state lives here and is only touched from `update`, so redraws
/// never see a half-applied action.
pub(crate) struct BoardView {
    game: game::Game,
    reducer: game::InputReducer,
    canvas: NodeRef,
    sprites: Option<SpriteSheet>,
    _sprite_listener: Option<EventListener>,
}

impl BoardView {
    fn surface_rect(&self) -> SurfaceRect {
        self.canvas
            .cast::<HtmlCanvasElement>()
            .map(|canvas| {
                let rect = canvas.get_bounding_client_rect();
                SurfaceRect {
                    left: rect.left(),
                    top: rect.top(),
                }
            })
            .unwrap_or_default()
    }

    fn context(&self) -> Option<CanvasRenderingContext2d> {
        self.canvas
            .cast::<HtmlCanvasElement>()?
            .get_context("2d")
            .ok()
            .flatten()?
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()
    }

    fn draw(&self) {
        let Some(sheet) = self.sprites.as_ref().filter(|sheet| sheet.is_loaded()) else {
            log::trace!("sprite sheet not ready, skipping draw");
            return;
        };
        let Some(ctx) = self.context() else {
            log::error!("canvas has no 2d context");
            return;
        };

        for (coords, visual) in game::frame(self.game.grid(), self.reducer.selection()) {
            for sprite in visual.sprites() {
                if let Err(err) = sheet.draw(&ctx, sprite, coords) {
                    log::error!("failed to draw {:?} at {:?}: {:?}", sprite, coords, err);
                    return;
                }
            }
        }
    }

    fn pointer_callback(ctx: &Context<Self>, kind: PointerKind) -> Callback<MouseEvent> {
        ctx.link().callback(move |e: MouseEvent| {
            if matches!(kind, PointerKind::ContextMenu) {
                e.prevent_default();
            }
            Msg::Pointer(pointer_sample(&e, kind))
        })
    }
}

fn pointer_sample(e: &MouseEvent, kind: PointerKind) -> PointerSample {
    let button = match kind {
        PointerKind::Press | PointerKind::Release => Some(PointerButton::from_dom(e.button())),
        PointerKind::Enter | PointerKind::Move | PointerKind::ContextMenu | PointerKind::Leave => {
            None
        }
    };
    PointerSample {
        x: f64::from(e.client_x()),
        y: f64::from(e.client_y()),
        kind,
        button,
        buttons: PointerButtons::from_bits_truncate(e.buttons()),
    }
}

fn status_class(status: game::GameStatus) -> &'static str {
    use game::GameStatus::*;
    match status {
        InProgress => "in-progress",
        Won => "win",
        Lost => "lose",
    }
}

fn format_for_counter(num: isize) -> String {
    match num {
        ..-99 => "-99".to_string(),
        -99..0 => format!("-{:02}", -num),
        0..1000 => format!("{:03}", num),
        1000.. => "999".to_string(),
    }
}

impl Component for BoardView {
    type Message = Msg;
    type Properties = BoardProps;

    fn create(ctx: &Context<Self>) -> Self {
        let config = game::GameConfig::default();
        let game = game::Game::new(config, game::RandomPlacer::from_seed(ctx.props().seed));

        let sprites = SpriteSheet::load()
            .inspect_err(|err| log::error!("failed to load sprite sheet: {:?}", err))
            .ok();
        let sprite_listener = sprites.as_ref().map(|sheet| {
            let link = ctx.link().clone();
            EventListener::once(sheet.image(), "load", move |_| {
                link.send_message(Msg::SpriteLoaded)
            })
        });

        Self {
            game,
            reducer: game::InputReducer::new(config.size(), CELL_SIZE),
            canvas: NodeRef::default(),
            sprites,
            _sprite_listener: sprite_listener,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Pointer(sample) => {
                let rect = self.surface_rect();
                match self.reducer.reduce(&mut self.game, sample, rect) {
                    Ok(changed) => changed,
                    Err(err) => {
                        log::error!("dropped pointer sample {:?}: {}", sample, err);
                        false
                    }
                }
            }
            Msg::SpriteLoaded => {
                log::debug!("sprite sheet loaded");
                true
            }
            Msg::NewGame => {
                self.game.reset();
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let (cols, rows) = self.game.config().size();
        let width = (f64::from(cols) * CELL_SIZE).to_string();
        let height = (f64::from(rows) * CELL_SIZE).to_string();
        let flowers_left = format_for_counter(self.game.flowers_left());
        let status = classes!(status_class(self.game.status()));

        let cb_new_game = ctx.link().callback(|e: MouseEvent| {
            e.stop_propagation();
            Msg::NewGame
        });

        html! {
            <div class="flowers">
                <nav>
                    <aside>{flowers_left}</aside>
                    <span><button class={status} onclick={cb_new_game}/></span>
                </nav>
                <canvas
                    ref={self.canvas.clone()}
                    {width}
                    {height}
                    onmouseenter={Self::pointer_callback(ctx, PointerKind::Enter)}
                    onmousemove={Self::pointer_callback(ctx, PointerKind::Move)}
                    onmousedown={Self::pointer_callback(ctx, PointerKind::Press)}
                    onmouseup={Self::pointer_callback(ctx, PointerKind::Release)}
                    oncontextmenu={Self::pointer_callback(ctx, PointerKind::ContextMenu)}
                    onmouseleave={Self::pointer_callback(ctx, PointerKind::Leave)}
                />
            </div>
        }
    }

    fn rendered(&mut self, _ctx: &Context<Self>, _first_render: bool) {
        self.draw();
    }
}
