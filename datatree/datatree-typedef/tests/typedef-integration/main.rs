mod test_flatten;
mod test_js_objects;
mod test_projector;
