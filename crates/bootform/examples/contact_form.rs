//! Renders a contact form to stdout.
//!
//! ```text
//! cargo run -p bootform --example contact_form -- --horizontal --verbose
//! ```

use bootform::fields::{
    checkbox_field, email_field, hidden_field, radio_field, select_field, submit_field,
    text_field, textarea_field,
};
use bootform::renderer::{FormRenderer, Layout};
use bootform::validation::LengthValidator;
use bootform::{Form, SimpleFormRenderer};
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "contact_form")]
#[command(about = "Render a sample contact form")]
struct Cli {
    /// Use the horizontal layout.
    #[arg(long)]
    horizontal: bool,

    /// Use the single-algorithm renderer.
    #[arg(long)]
    simple: bool,

    /// Do not show validation errors.
    #[arg(long)]
    hide_errors: bool,

    /// Enable debug logging.
    #[arg(short, long)]
    verbose: bool,
}

fn contact_form() -> Form {
    let mut form = Form::new("contact");
    form.set_action("/contact");
    form.set_class("form");

    form.field(hidden_field("source", "example"))
        .field(
            text_field("name", "Name")
                .required()
                .validator(LengthValidator::max(80)),
        )
        .field(email_field("email", "Email").required().value("not-an-address"))
        .field(
            select_field("topic", "Topic", vec![("sales", "Sales"), ("support", "Support")])
                .value("support"),
        )
        .field(
            radio_field("reply", "Reply by", vec![("email", "Email"), ("phone", "Phone")])
                .inline()
                .value("email"),
        )
        .field(checkbox_field(
            "extras",
            "Extras",
            vec![("newsletter", "Newsletter"), ("offers", "Offers")],
        ))
        .field(textarea_field("message", "Message", 5).required())
        .field(submit_field("send", "Send"))
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose {
        Level::TRACE
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .without_time()
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let form = contact_form();
    info!(valid = form.is_valid(), "built contact form");

    let html = if cli.simple {
        SimpleFormRenderer::new("contact").render(&form, !cli.hide_errors)
    } else {
        let layout = if cli.horizontal {
            Layout::horizontal()
        } else {
            Layout::Vertical
        };
        FormRenderer::new()
            .layout(layout)
            .render(&form, !cli.hide_errors)?
    };

    println!("{html}");
    Ok(())
}
