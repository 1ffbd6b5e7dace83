use slotmap::SlotMap;

use fadetip::catalog::QuestCatalog;
use fadetip::loading;
use fadetip::ui::{
    DrawList, FrameContext, Rect, Size, Theme, TooltipController, WidgetId, emit_tooltip,
    tooltip_content_size,
};

const FRAME_DT: f32 = 1.0 / 60.0;
const SCREEN: Size = Size {
    width: 1280.0,
    height: 720.0,
};
const ROW_HEIGHT: f32 = 28.0;

/// A hoverable quest-list row.
struct Row {
    rect: Rect,
    quest: String,
}

/// Scripted cursor segment: hold `cursor` for `seconds`.
struct Segment {
    cursor: (f32, f32),
    seconds: f32,
    busy: bool,
}

/// Headless stand-in for the game's menu layer: owns the rows, routes
/// hover enter/leave into the tooltip, and renders into a draw list.
struct DemoHost {
    rows: SlotMap<WidgetId, Row>,
    catalog: QuestCatalog,
    hovered: Option<WidgetId>,
    tooltip: TooltipController,
    theme: Theme,
    draw_list: DrawList,
}

impl DemoHost {
    fn new(catalog: QuestCatalog, tooltip: TooltipController) -> Self {
        let mut rows = SlotMap::with_key();
        for (i, quest) in catalog.iter().enumerate() {
            rows.insert(Row {
                rect: Rect {
                    x: 40.0,
                    y: 80.0 + i as f32 * ROW_HEIGHT,
                    width: 360.0,
                    height: ROW_HEIGHT,
                },
                quest: quest.identifier.clone(),
            });
        }
        // One row against the bottom-right corner to exercise flipping.
        if let Some(last) = catalog.iter().last() {
            rows.insert(Row {
                rect: Rect {
                    x: SCREEN.width - 200.0,
                    y: SCREEN.height - ROW_HEIGHT,
                    width: 200.0,
                    height: ROW_HEIGHT,
                },
                quest: last.identifier.clone(),
            });
        }

        Self {
            rows,
            catalog,
            hovered: None,
            tooltip,
            theme: Theme::default(),
            draw_list: DrawList::new(),
        }
    }

    fn row_at(&self, x: f32, y: f32) -> Option<WidgetId> {
        self.rows
            .iter()
            .find(|(_, row)| row.rect.contains(x, y))
            .map(|(id, _)| id)
    }

    fn route_hover(&mut self, cursor: (f32, f32)) {
        let now = self.row_at(cursor.0, cursor.1);
        if now == self.hovered {
            return;
        }
        if let Some(prev) = self.hovered {
            self.tooltip.hide(prev);
        }
        if let Some(id) = now
            && let Some(row) = self.rows.get(id)
            && let Some(quest) = self.catalog.find(&row.quest)
        {
            self.tooltip.show(id, &quest.name, &quest.description);
        }
        self.hovered = now;
    }

    fn frame(&mut self, ctx: &FrameContext) {
        self.route_hover(ctx.cursor);
        self.tooltip.advance(FRAME_DT, ctx);

        self.draw_list.clear();
        let content =
            tooltip_content_size(&self.theme, self.tooltip.title(), self.tooltip.body());
        emit_tooltip(&mut self.draw_list, &self.tooltip, &self.theme, content);
    }
}

fn script(host: &DemoHost) -> Vec<Segment> {
    let centers: Vec<(f32, f32)> = host
        .rows
        .values()
        .map(|r| (r.rect.x + 10.0, r.rect.y + r.rect.height / 2.0))
        .collect();

    let mut segments = Vec::new();
    for &cursor in &centers {
        segments.push(Segment {
            cursor,
            seconds: 1.5,
            busy: false,
        });
    }
    segments.push(Segment {
        cursor: (900.0, 100.0),
        seconds: 0.5,
        busy: false,
    });
    if let Some(&first) = centers.first() {
        segments.push(Segment {
            cursor: first,
            seconds: 1.5,
            busy: false,
        });
        segments.push(Segment {
            cursor: first,
            seconds: 0.3,
            busy: true,
        });
    }
    segments
}

fn main() {
    env_logger::init();

    let timing = loading::load_tooltip_timing("data/tooltip.ron");
    let catalog = loading::load_quest_catalog("data/quests.kdl");
    if catalog.is_empty() {
        log::warn!("no quests loaded, nothing to hover");
        return;
    }

    let mut host = DemoHost::new(catalog, TooltipController::with_timing(timing));
    let segments = script(&host);

    let mut frame_no = 0u32;
    let mut last_logged = -1.0_f32;
    for seg in &segments {
        let frames = (seg.seconds / FRAME_DT).round() as u32;
        let ctx = FrameContext {
            busy: seg.busy,
            cursor: seg.cursor,
            viewport: Some(SCREEN),
        };
        for _ in 0..frames {
            host.frame(&ctx);
            frame_no += 1;

            // Log on opacity steps of ~25% and at the ends of the ramp.
            let opacity = host.tooltip.opacity();
            if (opacity - last_logged).abs() >= 0.25
                || (opacity != last_logged && (opacity == 0.0 || opacity == 1.0))
            {
                last_logged = opacity;
                let at = host
                    .draw_list
                    .blurs
                    .first()
                    .map(|b| (b.rect.x, b.rect.y));
                log::info!(
                    "frame {:4}: opacity {:.2} title {:?} anchor {:?} busy {}",
                    frame_no,
                    opacity,
                    host.tooltip.title(),
                    at,
                    seg.busy
                );
            }
        }
    }

    log::info!(
        "{} frames, final opacity {:.2}, collapsed {}",
        frame_no,
        host.tooltip.opacity(),
        host.tooltip.is_collapsed()
    );
}
