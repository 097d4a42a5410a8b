use std::path::{Path, PathBuf};

use clap::Subcommand;
use eyre::WrapErr;

use taklifnoma_core::models::config::TemplateConfig;
use taklifnoma_core::models::invitation::Invitation;
use taklifnoma_core::models::rsvp::Rsvp;
use taklifnoma_core::models::template::CategoryFilter;
use taklifnoma_core::presets;
use taklifnoma_core::slug::is_valid_slug;
use taklifnoma_render::html::render_html;
use taklifnoma_render::render::render;
use taklifnoma_render::resolve::apply_preset;
use taklifnoma_storage::catalog::CatalogListing;
use taklifnoma_storage::gateway::{CallOptions, PersistResult};

use crate::app::App;
use crate::config::{self, TaklifConfig};

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List the template catalog
    Templates {
        /// Category to show, or `all`
        #[arg(short, long, default_value = "all")]
        category: CategoryFilter,
    },
    /// List the color presets
    Presets,
    /// Render an invitation file to HTML without saving it
    Render {
        invitation: PathBuf,
        /// Template id, overriding the one in the file
        #[arg(short, long)]
        template: Option<String>,
        /// Color preset applied on top of the template
        #[arg(short, long)]
        preset: Option<String>,
        /// Output file (stdout if omitted)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
    /// Save an invitation file
    Save { invitation: PathBuf },
    /// Render a saved invitation by slug
    Show {
        #[arg(value_parser = slug_arg)]
        slug: String,
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
    /// Record a guest reply
    Rsvp {
        #[arg(value_parser = slug_arg)]
        slug: String,
        #[arg(long)]
        name: String,
        #[arg(long)]
        attending: bool,
        #[arg(long, default_value_t = 1)]
        guests: u32,
        #[arg(long)]
        message: Option<String>,
    },
    /// Manage the config file
    #[command(subcommand)]
    Config(ConfigCommand),
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Write a default config file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
    /// Print the active config
    Show,
}

pub async fn run(command: Command) -> eyre::Result<()> {
    match command {
        Command::Config(sub) => run_config(sub)?,
        Command::Templates { category } => {
            let app = open().await?;
            let listing = app.catalog.list_by_category(&app.identity, category).await;
            warn_user(listing.warning.as_deref());
            for template in &listing.templates {
                let origin = if template.is_builtin() { "built-in" } else { "custom" };
                println!(
                    "{} {:<22} {:<11} {:<9} {}",
                    template.preview, template.id, template.category, origin, template.name
                );
            }
        }
        Command::Presets => {
            for preset in presets::PRESETS {
                println!("{:<9} {:<8} {}", preset.id, preset.name, preset.palette.join(" "));
            }
        }
        Command::Render {
            invitation,
            template,
            preset,
            out,
        } => {
            let app = open().await?;
            let invitation = read_invitation(&invitation)?;
            let listing = app.catalog.list_all(&app.identity).await;
            warn_user(listing.warning.as_deref());
            let html =
                invitation_html(&listing, &invitation, template.as_deref(), preset.as_deref())?;
            write_output(out.as_deref(), &html)?;
        }
        Command::Save { invitation } => {
            let app = open().await?;
            let invitation = read_invitation(&invitation)?;
            let saved = app
                .gateway
                .save(&app.identity, invitation, CallOptions::default())
                .await?;
            report(&saved);
            println!("{}", saved.payload.slug);
        }
        Command::Show { slug, out } => {
            let app = open().await?;
            let loaded = app
                .gateway
                .load::<Invitation>(&app.identity, &slug, CallOptions::default())
                .await?;
            report(&loaded);
            let listing = app.catalog.list_all(&app.identity).await;
            let html = invitation_html(&listing, &loaded.payload, None, None)?;
            write_output(out.as_deref(), &html)?;
        }
        Command::Rsvp {
            slug,
            name,
            attending,
            guests,
            message,
        } => {
            let app = open().await?;
            // The invitation must exist somewhere before replies are accepted.
            app.gateway
                .load::<Invitation>(&app.identity, &slug, CallOptions::default())
                .await?;
            let rsvp = Rsvp {
                id: String::new(),
                invitation_slug: slug,
                guest_name: name,
                attending,
                guest_count: guests.max(1),
                message,
                created_at: None,
            };
            let saved = app
                .gateway
                .save(&app.identity, rsvp, CallOptions::default())
                .await?;
            report(&saved);
            println!("{}", saved.payload.id);
        }
    }
    Ok(())
}

/// Reject malformed slugs before any store is touched.
pub fn slug_arg(value: &str) -> Result<String, String> {
    if is_valid_slug(value) {
        Ok(value.to_string())
    } else {
        Err(format!(
            "`{value}` is not a valid slug (lowercase letters, digits and single hyphens)"
        ))
    }
}

async fn open() -> eyre::Result<App> {
    let config = config::load_or_default()?;
    Ok(App::from_config(&config).await)
}

fn run_config(command: ConfigCommand) -> eyre::Result<()> {
    match command {
        ConfigCommand::Init { force } => {
            let path = config::config_path()?;
            if path.exists() && !force {
                eyre::bail!(
                    "config already exists at {} (use --force to overwrite)",
                    path.display()
                );
            }
            let path = config::save_config(&config::default_config()?)?;
            println!("{}", path.display());
        }
        ConfigCommand::Show => {
            let config: TaklifConfig = config::load_or_default()?;
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
    }
    Ok(())
}

/// Resolve the template for `invitation` and render it as a full HTML page.
///
/// The per-invitation config wins over the template's own; a preset only
/// replaces colors.
pub fn invitation_html(
    listing: &CatalogListing,
    invitation: &Invitation,
    template_id: Option<&str>,
    preset_id: Option<&str>,
) -> eyre::Result<String> {
    let template_id = template_id.unwrap_or(&invitation.content.template_id);
    let template = listing.resolve(template_id);
    if template.id != template_id {
        tracing::warn!(requested = %template_id, used = %template.id, "template not found, using fallback");
    }

    let mut config: TemplateConfig = invitation
        .template_config
        .clone()
        .unwrap_or(template.config)
        .clamped();
    if let Some(preset_id) = preset_id {
        let preset =
            presets::find(preset_id).ok_or_else(|| eyre::eyre!("unknown preset: {preset_id}"))?;
        config = apply_preset(&config, &preset.colors());
    }

    let tree = render(&invitation.content, &config);
    Ok(render_html(&tree)?)
}

pub fn read_invitation(path: &Path) -> eyre::Result<Invitation> {
    let json = std::fs::read_to_string(path)
        .wrap_err_with(|| format!("failed to read {}", path.display()))?;
    Ok(Invitation::from_json(&json)?)
}

fn write_output(out: Option<&Path>, html: &str) -> eyre::Result<()> {
    match out {
        Some(path) => {
            std::fs::write(path, html)
                .wrap_err_with(|| format!("failed to write {}", path.display()))?;
            tracing::info!(path = %path.display(), "invitation written");
        }
        None => println!("{html}"),
    }
    Ok(())
}

fn report<T>(result: &PersistResult<T>) {
    tracing::info!(via = ?result.via, "done");
    warn_user(result.warning.as_deref());
}

fn warn_user(warning: Option<&str>) {
    if let Some(warning) = warning {
        eprintln!("warning: {warning}");
    }
}
