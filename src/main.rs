use polyscene::{
    config::AppConfig,
    flow,
    scenes::{Scene, SceneThree, SceneTwo},
};

fn main() -> anyhow::Result<()> {
    let which = std::env::args().nth(1).unwrap_or_else(|| "three".to_string());
    let scene: Box<dyn Scene> = match which.as_str() {
        "two" | "2" => Box::new(SceneTwo::new()?),
        "three" | "3" => Box::new(SceneThree::new()?),
        other => anyhow::bail!("unknown scene {other:?}, expected \"two\" or \"three\""),
    };
    let config = AppConfig::from_env().with_title(format!("polyscene - scene {}", scene.name()));
    flow::run(config, scene)
}
