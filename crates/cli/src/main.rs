use clap::{Parser, Subcommand};
use std::path::PathBuf;
use vet_core::{
    config::{resolve_components_dir, site_title_from_env_value},
    render_page,
    scroll::ScrollStrip,
    Catalog, ClinicPage, CoreConfig, DoctorRef, FsFragmentSource, PageEvent, PanelRenderer,
    ScrollDirection, SelectionState, SimulatedHost,
};

#[derive(Parser)]
#[command(name = "vet")]
#[command(about = "VetClinic catalog and page rendering CLI")]
struct Cli {
    /// Catalog YAML to use instead of the embedded one
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List clinics in selector order
    Clinics {
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// List a clinic's doctors
    Doctors {
        /// Clinic identifier
        clinic: String,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Print the clinic panel fragment
    Panel {
        /// Clinic identifier
        clinic: String,
    },
    /// Print the details fragment for one doctor
    Details {
        /// Clinic identifier
        clinic: String,
        /// Doctor position in the clinic list
        index: usize,
    },
    /// Render the full landing page
    Page {
        /// Clinic shown initially (defaults to the first clinic)
        #[arg(long)]
        clinic: Option<String>,
        /// Directory holding header.html and footer.html
        #[arg(long)]
        components: Option<PathBuf>,
        /// Write the page here instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Simulate the scroll buttons for a clinic's card strip
    Navigate {
        /// Clinic identifier
        clinic: String,
        /// Visible strip width in pixels
        #[arg(long, default_value_t = 900.0)]
        viewport: f64,
        /// Presses of the right button before scrolling back
        #[arg(long, default_value_t = 3)]
        steps: usize,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let catalog = Catalog::load(cli.catalog.as_deref())?;

    match cli.command {
        Some(Commands::Clinics { json }) => {
            let res = api_shared::ListClinicsRes::from_catalog(&catalog);
            if json {
                println!("{}", serde_json::to_string_pretty(&res)?);
            } else if res.clinics.is_empty() {
                println!("No clinics found.");
            } else {
                for clinic in res.clinics {
                    println!(
                        "{}: {} ({} doctors)",
                        clinic.id, clinic.label, clinic.doctor_count
                    );
                }
            }
        }
        Some(Commands::Doctors { clinic, json }) => {
            match api_shared::ListDoctorsRes::from_catalog(&catalog, &clinic) {
                Some(res) if json => println!("{}", serde_json::to_string_pretty(&res)?),
                Some(res) => {
                    println!("{}", res.label);
                    for doctor in res.doctors {
                        println!(
                            "  [{}] {}, {}, {}",
                            doctor.index,
                            doctor.full_name,
                            doctor.specialization,
                            doctor.experience_text
                        );
                    }
                }
                None => eprintln!("Unknown clinic: {}", clinic),
            }
        }
        Some(Commands::Panel { clinic }) => {
            let mut selection = SelectionState::new();
            let render = PanelRenderer::new(&catalog).render(&clinic, &mut selection);
            println!("{}", render.fragment());
        }
        Some(Commands::Details { clinic, index }) => {
            match PanelRenderer::new(&catalog).details(&DoctorRef::new(clinic.as_str(), index)) {
                Some(markup) => println!("{}", markup),
                None => eprintln!("No doctor {} in clinic {}", index, clinic),
            }
        }
        Some(Commands::Page {
            clinic,
            components,
            out,
        }) => {
            let components_dir = resolve_components_dir(components)?;
            let site_title = site_title_from_env_value(std::env::var("VET_SITE_TITLE").ok());
            let cfg = CoreConfig::new(components_dir, cli.catalog.clone(), site_title)?;
            let source = FsFragmentSource::new(cfg.components_dir());

            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()?;
            let html =
                runtime.block_on(render_page(&catalog, &cfg, &source, clinic.as_deref()));

            match out {
                Some(path) => {
                    std::fs::write(&path, html)?;
                    println!("Wrote page to {}", path.display());
                }
                None => println!("{}", html),
            }
        }
        Some(Commands::Navigate {
            clinic,
            viewport,
            steps,
        }) => {
            let mut page = ClinicPage::new(&catalog, SimulatedHost::new(viewport));
            page.start(Some(&clinic));
            if !page.navigator().is_bound() {
                println!("No card strip for clinic {}", clinic);
                return Ok(());
            }
            print_navigation(&page, "bind");
            for _ in 0..steps {
                page.dispatch(PageEvent::Scroll(ScrollDirection::Right));
                print_navigation(&page, "right");
            }
            for _ in 0..steps {
                page.dispatch(PageEvent::Scroll(ScrollDirection::Left));
                print_navigation(&page, "left");
            }
        }
        None => {
            println!("Use 'vet --help' for commands");
        }
    }

    Ok(())
}

fn print_navigation(page: &ClinicPage<'_, SimulatedHost>, action: &str) {
    let navigator = page.navigator();
    let offset = navigator.strip().map(|s| s.scroll_left()).unwrap_or(0.0);
    let (left, right) = navigator.buttons();
    let shown = |b: Option<&vet_core::scroll::ToggleButton>| {
        if b.is_some_and(|b| b.visible) {
            "shown"
        } else {
            "hidden"
        }
    };
    println!(
        "{:>5}  offset {:>6.0}  left {:<6}  right {}",
        action,
        offset,
        shown(left),
        shown(right)
    );
}
