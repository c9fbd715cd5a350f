use super::classifier::Classifier;
use super::classifier::INPUTS;
use super::classifier::Input;
use crate::Probability;
use anyhow::Context;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Activation {
    Relu,
    Softmax,
    Linear,
}

impl Activation {
    fn apply(&self, mut x: Vec<f32>) -> Vec<f32> {
        match self {
            Self::Linear => x,
            Self::Relu => {
                x.iter_mut().for_each(|v| *v = v.max(0.));
                x
            }
            Self::Softmax => {
                let max = x.iter().copied().fold(f32::NEG_INFINITY, f32::max);
                x.iter_mut().for_each(|v| *v = (*v - max).exp());
                let sum = x.iter().sum::<f32>();
                x.iter_mut().for_each(|v| *v /= sum);
                x
            }
        }
    }
}

/// A fully connected layer. `kernel[i][j]` weighs input `i` into output `j`.
#[derive(Debug, Clone, PartialEq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Dense {
    pub kernel: Vec<Vec<f32>>,
    pub bias: Vec<f32>,
    pub activation: Activation,
}

impl Dense {
    pub fn inputs(&self) -> usize {
        self.kernel.len()
    }
    pub fn outputs(&self) -> usize {
        self.bias.len()
    }
    fn forward(&self, x: &[f32]) -> Vec<f32> {
        debug_assert_eq!(x.len(), self.inputs());
        let y = self
            .kernel
            .iter()
            .zip(x.iter())
            .fold(self.bias.clone(), |mut y, (row, xi)| {
                y.iter_mut().zip(row.iter()).for_each(|(yj, w)| *yj += xi * w);
                y
            });
        self.activation.apply(y)
    }
    fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(self.outputs() > 0, "layer has no outputs");
        anyhow::ensure!(
            self.kernel.iter().all(|row| row.len() == self.outputs()),
            "kernel rows must match bias width {}",
            self.outputs()
        );
        Ok(())
    }
}

/// A feed-forward classifier over the seven-wide table [`Input`].
///
/// Weights load from JSON, either as `{"layers": [Dense, ..]}` or as a Keras
/// `model_weights` export of the three-layer 7→32→32→41 model (ReLU, ReLU,
/// softmax).
#[derive(Debug, Clone, PartialEq)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(try_from = "Layers")]
pub struct Network {
    layers: Vec<Dense>,
}

/// Unchecked wire form of a [`Network`].
#[derive(serde::Deserialize)]
struct Layers {
    layers: Vec<Dense>,
}

impl TryFrom<Layers> for Network {
    type Error = anyhow::Error;
    fn try_from(Layers { layers }: Layers) -> Result<Self, Self::Error> {
        Self::try_from(layers)
    }
}

impl Network {
    pub fn layers(&self) -> &[Dense] {
        &self.layers
    }
    pub fn forward(&self, x: &[f32]) -> Vec<f32> {
        self.layers
            .iter()
            .fold(x.to_vec(), |x, layer| layer.forward(&x))
    }

    fn validate(self) -> anyhow::Result<Self> {
        let first = self.layers.first().context("network has no layers")?;
        anyhow::ensure!(
            first.inputs() == INPUTS,
            "first layer takes {} inputs, expected {}",
            first.inputs(),
            INPUTS
        );
        for (i, layer) in self.layers.iter().enumerate() {
            layer.validate().with_context(|| format!("layer {}", i))?;
        }
        for (i, pair) in self.layers.windows(2).enumerate() {
            anyhow::ensure!(
                pair[0].outputs() == pair[1].inputs(),
                "layer {} emits {} values, layer {} takes {}",
                i,
                pair[0].outputs(),
                i + 1,
                pair[1].inputs()
            );
        }
        Ok(self)
    }

    /// model_weights.<name>.<name>.{kernel:0, bias:0}
    fn keras(json: &serde_json::Value) -> anyhow::Result<Self> {
        let weights = json.get("model_weights").context("missing model_weights")?;
        let layers = [
            ("dense", Activation::Relu),
            ("dense_1", Activation::Relu),
            ("dense_2", Activation::Softmax),
        ]
        .into_iter()
        .map(|(name, activation)| -> anyhow::Result<Dense> {
            let layer = weights
                .get(name)
                .and_then(|group| group.get(name))
                .with_context(|| format!("missing layer {}", name))?;
            let kernel = layer.get("kernel:0").cloned().context("missing kernel")?;
            let bias = layer.get("bias:0").cloned().context("missing bias")?;
            Ok(Dense {
                kernel: serde_json::from_value(kernel).with_context(|| format!("{} kernel", name))?,
                bias: serde_json::from_value(bias).with_context(|| format!("{} bias", name))?,
                activation,
            })
        })
        .collect::<anyhow::Result<Vec<Dense>>>()?;
        Self::try_from(layers)
    }
}

impl TryFrom<Vec<Dense>> for Network {
    type Error = anyhow::Error;
    fn try_from(layers: Vec<Dense>) -> Result<Self, Self::Error> {
        Self { layers }.validate()
    }
}

impl TryFrom<&str> for Network {
    type Error = anyhow::Error;
    fn try_from(json: &str) -> Result<Self, Self::Error> {
        let value = serde_json::from_str::<serde_json::Value>(json).context("parsing network json")?;
        let network = if value.get("model_weights").is_some() {
            Self::keras(&value)?
        } else {
            serde_json::from_value::<Self>(value).context("reading network layers")?
        };
        log::debug!("{:<32}{:<32}", "loaded network", format!("{} layers", network.layers.len()));
        Ok(network)
    }
}

impl Classifier for Network {
    fn predict(&self, input: &Input) -> Vec<Probability> {
        self.forward(input.values())
    }
}
