mod login_page;
mod provider_button;
