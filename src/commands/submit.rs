//! Send the contact form

use anyhow::Result;

use crate::content::ContactForm;
use crate::Eventum;

/// Validate and submit a contact form, printing the stored record
pub async fn run(app: &Eventum, form: &ContactForm) -> Result<()> {
    form.validate()?;

    tracing::info!(
        "Submitting contact form for {} ({} services)",
        form.email,
        form.services.len()
    );
    let submission = app.client.submit_contact_form(form).await?;

    println!(
        "Submission #{} received (status: {:?})",
        submission.id, submission.status
    );
    Ok(())
}
