mod call_site;
mod reporter;
mod stub;
