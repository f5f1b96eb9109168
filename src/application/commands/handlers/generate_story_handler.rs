//! Generate Story Handler
//!
//! 一次 `/generate` 调用的完整流程：
//! 1. 一次文本生成，解析为草稿并规整片段数量
//! 2. 逐段生成插图；任一段失败后其余片段改用占位插图（配额保护）

use std::sync::Arc;
use uuid::Uuid;

use crate::application::commands::story_commands::*;
use crate::application::error::ApplicationError;
use crate::application::ports::{ImageRequest, StoryModelPort, TextRequest};
use crate::domain::story::{
    ensure_part_count, image_data_uri, is_placeholder, parse_story_response, placeholder_image,
    Prompt, Story, StoryError, StoryPart,
};

/// 插图描述最多取前 300 个字符
const SCENE_MAX_CHARS: usize = 300;

const STORY_SYSTEM_INSTRUCTION: &str = "\
You are a creative children's story writer. Create engaging, magical, and age-appropriate stories \
that are perfect for children aged 4-12.

Requirements:
1. Each part should be 2-4 sentences long
2. Use vivid, descriptive language that can be easily illustrated
3. Include magical elements and positive themes
4. Ensure a clear story arc with beginning, middle, and end
5. Use markdown formatting: ## for headers, **text** for bold emphasis
6. Each part should flow naturally to the next";

/// 故事生成配置
#[derive(Debug, Clone)]
pub struct GenerateStoryConfig {
    /// 故事片段数
    pub part_count: usize,
    /// 每次请求允许的模型调用上限（含一次文本调用）
    pub max_model_calls: usize,
    pub story_temperature: f32,
    pub max_output_tokens: u32,
    pub image_temperature: f32,
}

impl Default for GenerateStoryConfig {
    fn default() -> Self {
        Self {
            part_count: 8,
            max_model_calls: 15,
            story_temperature: 0.8,
            max_output_tokens: 2000,
            image_temperature: 0.7,
        }
    }
}

impl GenerateStoryConfig {
    /// 可用于插图的调用次数（预留一次给文本生成）
    pub fn image_call_budget(&self) -> usize {
        self.max_model_calls.saturating_sub(1).min(self.part_count)
    }
}

/// GenerateStory Handler - 生成故事文本与插图
pub struct GenerateStoryHandler {
    model: Arc<dyn StoryModelPort>,
    config: GenerateStoryConfig,
}

impl GenerateStoryHandler {
    pub fn new(model: Arc<dyn StoryModelPort>, config: GenerateStoryConfig) -> Self {
        Self { model, config }
    }

    pub async fn handle(
        &self,
        cmd: GenerateStoryCommand,
    ) -> Result<GenerateStoryResponse, ApplicationError> {
        let prompt = Prompt::new(&cmd.prompt)?;
        let generation_id = Uuid::new_v4();
        let part_count = self.config.part_count;

        tracing::info!(
            generation_id = %generation_id,
            prompt = %prompt.preview(50),
            "Generating story"
        );

        let raw = self
            .model
            .generate_text(self.story_request(&prompt))
            .await?;

        let draft = parse_story_response(&raw, part_count)?;
        if draft.parts.is_empty() {
            return Err(StoryError::NoParts.into());
        }
        if draft.parts.len() != part_count {
            tracing::warn!(
                generation_id = %generation_id,
                generated = draft.parts.len(),
                expected = part_count,
                "Unexpected number of story parts"
            );
        }

        let title = draft.title;
        let texts = ensure_part_count(draft.parts, part_count);

        tracing::info!(
            generation_id = %generation_id,
            title = %title,
            parts = texts.len(),
            fallback = draft.from_fallback,
            "Story text generated"
        );

        let parts = self.illustrate(generation_id, texts, &prompt).await;

        let placeholders_used = parts.iter().filter(|p| is_placeholder(&p.image)).count();
        let images_generated = parts.len() - placeholders_used;

        tracing::info!(
            generation_id = %generation_id,
            images_generated = images_generated,
            placeholders_used = placeholders_used,
            "Story illustrated"
        );

        Ok(GenerateStoryResponse {
            story: Story::new(title, parts),
            images_generated,
            placeholders_used,
        })
    }

    /// 逐段生成插图
    async fn illustrate(
        &self,
        generation_id: Uuid,
        texts: Vec<String>,
        prompt: &Prompt,
    ) -> Vec<StoryPart> {
        let budget = self.config.image_call_budget();
        let mut exhausted = false;
        let mut parts = Vec::with_capacity(texts.len());

        for (index, text) in texts.into_iter().enumerate() {
            let part_number = index + 1;

            if exhausted || index >= budget {
                tracing::debug!(part = part_number, "Skipping image generation");
                parts.push(StoryPart::new(text, placeholder_image(part_number)));
                continue;
            }

            let request = self.image_request(&text, prompt, part_number);
            let image = match self.model.generate_image(request).await {
                Ok(Some(image)) => {
                    tracing::info!(part = part_number, bytes = image.data.len(), "Image generated");
                    image_data_uri(&image.mime_type, &image.data)
                }
                Ok(None) => {
                    tracing::warn!(part = part_number, "No image data in model response");
                    exhausted = true;
                    placeholder_image(part_number)
                }
                Err(e) if e.is_quota_exhausted() => {
                    tracing::warn!(
                        generation_id = %generation_id,
                        part = part_number,
                        "Model quota exhausted, using placeholders for remaining images"
                    );
                    exhausted = true;
                    placeholder_image(part_number)
                }
                Err(e) => {
                    tracing::error!(part = part_number, error = %e, "Image generation failed");
                    exhausted = true;
                    placeholder_image(part_number)
                }
            };

            parts.push(StoryPart::new(text, image));
        }

        parts
    }

    fn story_request(&self, prompt: &Prompt) -> TextRequest {
        let n = self.config.part_count;
        let prompt = format!(
            "Create a magical children's story based on this idea: {prompt}\n\n\
             Return ONLY a valid JSON object, with no extra text and no code fences. \
             Do NOT join strings with + operators.\n\n\
             Structure:\n\
             {{\"title\": \"Story Title\", \"parts\": [{{\"part_number\": 1, \"content\": \"## Part Title\\n\\nStory text with **bold** words.\"}}, ...]}}\n\n\
             Requirements:\n\
             - Exactly {n} parts\n\
             - Each content is ONE continuous string of 2-4 sentences\n\
             - Use ## for part headers and **text** for emphasis\n\
             - Each part is descriptive enough to illustrate",
        );

        TextRequest {
            system_instruction: Some(STORY_SYSTEM_INSTRUCTION.to_string()),
            prompt,
            temperature: self.config.story_temperature,
            max_output_tokens: Some(self.config.max_output_tokens),
        }
    }

    fn image_request(&self, text: &str, prompt: &Prompt, part_number: usize) -> ImageRequest {
        let scene: String = text
            .replace(['#', '*'], "")
            .trim()
            .chars()
            .take(SCENE_MAX_CHARS)
            .collect();

        let prompt = format!(
            "Create a beautiful, child-friendly illustration for part {part_number} of a children's story about {prompt}.\n\n\
             Scene description: {scene}\n\n\
             Style: colorful and magical, warm and inviting, digital storybook art with soft lighting \
             and vibrant, cheerful colors, suitable for children aged 4-12.\n\n\
             The image must clearly show the key elements and mood of this part of the story.",
        );

        ImageRequest {
            prompt,
            temperature: self.config.image_temperature,
        }
    }
}
