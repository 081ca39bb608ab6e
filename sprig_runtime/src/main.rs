use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use log::info;
use sprig_nodes::{CanvasGroup, SceneNode, SceneNodeData};
use sprig_runtime::Runtime;
use sprig_runtime::api::{NodeAPI, TimeAPI};
use sprig_structs::{UiRect, Vector2};

const FRAME: f32 = 1.0 / 60.0;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = env::args().collect();
    let project_root = match args.iter().position(|a| a == "--path") {
        Some(i) => PathBuf::from(
            args.get(i + 1)
                .context("`--path` expects a project directory")?,
        ),
        None => env::current_dir()?,
    };

    let config = sprig_project::load_or_default(&project_root, "sprig")
        .with_context(|| format!("loading config from {}", project_root.display()))?;
    info!(
        "project `{}` at {}x{} (interval keys: {:?})",
        config.name, config.virtual_width, config.virtual_height, config.interval_keys
    );

    let mut runtime = Runtime::from_config(&config);

    // A -> [B -> [D, E], C -> [F]], plus a fading HUD and a badge under C.
    let a = runtime.nodes.insert(SceneNode::named("A"));
    let b = runtime.nodes.add_child(a, SceneNode::named("B"))?;
    let c = runtime.nodes.add_child(a, SceneNode::named("C"))?;
    runtime.nodes.add_child(b, SceneNode::named("D"))?;
    runtime.nodes.add_child(b, SceneNode::named("E"))?;
    runtime.nodes.add_child(c, SceneNode::named("F"))?;
    let hud = runtime.nodes.add_child(
        a,
        SceneNode::new("HUD", SceneNodeData::CanvasGroup(CanvasGroup::default())),
    )?;
    let badge = runtime.nodes.add_child(
        c,
        SceneNode::new(
            "Badge",
            SceneNodeData::UiRect(UiRect::new(Vector2::new(960.0, 540.0), Vector2::ONE)),
        ),
    )?;

    for name in ["F", "Z", "A"] {
        match runtime.find_deep_child(a, name)? {
            Some(id) => info!("find_deep_child({name}) -> {id}"),
            None => info!("find_deep_child({name}) -> not found"),
        }
    }

    let local = runtime.canvas_element_local_position(badge)?;
    info!("badge local position {local}");

    runtime.fade_canvas_group(hud, 0.0, 0.5)?;
    runtime.wait_and_execute(1.0, move |rt| {
        if let Ok(count) = rt.delete_children(b) {
            info!("deleting {count} children of B");
        }
    });

    while runtime.get_elapsed() < 1.5 {
        runtime.update(FRAME);
    }

    let alpha = runtime
        .nodes
        .get(hud)
        .and_then(SceneNode::canvas_group)
        .map(|group| group.alpha);
    info!(
        "after {:.2}s: {} nodes, hud alpha {:?}, {} cached intervals",
        runtime.get_elapsed(),
        runtime.nodes.len(),
        alpha,
        runtime.intervals().len()
    );

    Ok(())
}
