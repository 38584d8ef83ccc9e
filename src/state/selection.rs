/// Crop names picked by the user, kept in the order they were picked.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct SelectedCrops(Vec<String>);

impl SelectedCrops {
    pub fn contains(&self, crop: &str) -> bool {
        self.0.iter().any(|c| c == crop)
    }

    /// Adds the crop if absent, removes it otherwise.
    pub fn toggle(&mut self, crop: &str) {
        if let Some(index) = self.0.iter().position(|c| c == crop) {
            self.0.remove(index);
        } else {
            self.0.push(crop.to_string());
        }
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.0.clone()
    }
}
