use anyhow::Result;
use triptych::prelude::*;

struct PrintingEngine;

struct PrintingInstance {
    node_count: usize,
}

impl RenderingEngine for PrintingEngine {
    fn create(&self, spec: DiagramSpec) -> Result<Box<dyn DiagramInstance>> {
        println!(
            "engine: created diagram with {} nodes and {} edges",
            spec.elements.node_count(),
            spec.elements.edge_count()
        );
        for node in &spec.elements.nodes {
            println!("  [{}] {} ({})", node.id, node.label, node.color);
        }
        Ok(Box::new(PrintingInstance {
            node_count: spec.elements.node_count(),
        }))
    }

    fn name(&self) -> &'static str {
        "printing"
    }
}

impl DiagramInstance for PrintingInstance {
    fn run_layout(&mut self, layout: &LayoutSpec) -> Result<()> {
        println!(
            "engine: arranged {} nodes with the {} layout",
            self.node_count,
            layout.name()
        );
        Ok(())
    }

    fn center(&mut self) -> Result<()> {
        println!("engine: centered viewport");
        Ok(())
    }

    fn fit(&mut self, padding: u32) -> Result<()> {
        println!("engine: fitted viewport with {}px padding", padding);
        Ok(())
    }

    fn png(&self, options: &SnapshotOptions) -> Result<Vec<u8>> {
        println!(
            "engine: rasterized at {}x scale over {}",
            options.scale, options.background
        );
        Ok(vec![0x89, 0x50, 0x4e, 0x47, 0x0d, 0x0a, 0x1a, 0x0a])
    }

    fn destroy(&mut self) {
        println!("engine: destroyed instance");
    }
}

struct PrintingSink;

impl ArtifactSink for PrintingSink {
    fn deliver(&mut self, artifact: ExportArtifact) -> Result<()> {
        println!(
            "sink: received {} ({} bytes, {})",
            artifact.filename,
            artifact.bytes.len(),
            artifact.media_type
        );
        Ok(())
    }
}

fn main() {
    let theme = |variable: &str, fallback: &str| -> String {
        match variable {
            "--human" => "#f472b6".to_string(),
            "--country" => "#fbbf24".to_string(),
            "--org" => "#4ade80".to_string(),
            _ => fallback.to_string(),
        }
    };

    let mut controller = DiagramController::with_engine(PrintingEngine, theme, PrintingSink);

    let payload = r#"{"triplets": [
        {"subject": "Marie Curie", "subject_qid": "Q7186", "subject_type": "human",
         "predicate": "educated at",
         "object": "University of Paris", "object_qid": "Q209842", "object_type": "organisation"},
        {"subject": "Marie Curie", "subject_qid": "Q7186", "subject_type": "human",
         "predicate": "country of citizenship",
         "object": "Poland", "object_qid": "Q36", "object_type": "country"}
    ]}"#;
    let triplets = AnalysisPayload::from_json(payload).unwrap().into_triplets();

    println!("=== Render ===");
    controller.render(triplets);
    println!("state: {:?}", controller.state());

    println!("\n=== Export ===");
    controller.export();

    println!("\n=== Clear ===");
    controller.render(Vec::new());
    println!("state: {:?}", controller.state());
    println!("placeholder visible: {}", controller.placeholder_visible());
}
